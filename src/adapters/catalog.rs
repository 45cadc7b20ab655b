use crate::domain::model::Snapshot;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Read-only catalog snapshot backed by a TOML file.
///
/// Expected shape: `[[stores]]` tables with `name`/`preferred` and
/// `[[items]]` tables with `name`, `interval_weeks`, `stores` and
/// `purchased` (dates as quoted `"YYYY-MM-DD"` strings, oldest first).
#[derive(Debug, Clone)]
pub struct TomlCatalog {
    path: PathBuf,
}

impl TomlCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub fn parse_catalog(content: &str) -> Result<Snapshot> {
    let snapshot: Snapshot = toml::from_str(content)?;

    // Dangling store references are a catalog bug, not ours to fix; the
    // planner still reports them properly, so just flag them here.
    for item in &snapshot.items {
        for store in &item.stores {
            if !snapshot.stores.iter().any(|s| &s.name == store) {
                tracing::warn!("item '{}' references unknown store '{}'", item.name, store);
            }
        }
    }

    Ok(snapshot)
}

impl CatalogSource for TomlCatalog {
    async fn load(&self) -> Result<Snapshot> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_catalog(&content)
    }
}
