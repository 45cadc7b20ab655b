use crate::domain::model::{RunPlan, Snapshot};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of catalog snapshots (the persistence collaborator).
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Snapshot>> + Send;
}

/// A recommendation path: turns a snapshot plus a reference date into a
/// Run Plan. The deterministic engine and the LLM-backed path both
/// implement this, so callers consume either interchangeably.
#[async_trait]
pub trait Planner: Send + Sync {
    async fn plan(&self, snapshot: &Snapshot, today: NaiveDate) -> Result<RunPlan>;
}
