pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::catalog::TomlCatalog;
pub use adapters::llm::LlmPlanner;
pub use crate::core::engine::NextRunPlanner;
pub use domain::model::{Item, RunPlan, Snapshot, Store};
pub use domain::ports::{CatalogSource, Planner};
pub use utils::error::{ErrandsError, Result};
