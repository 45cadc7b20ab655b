use crate::core::{assign, due, hitting_set};
use crate::domain::model::{RunPlan, Snapshot};
use crate::domain::ports::Planner;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// The deterministic recommendation path.
///
/// One invocation walks the snapshot once: estimate cadences, select due
/// items, solve for the minimal store set, group the plan. Pure
/// computation over an immutable snapshot; repeated calls with the same
/// input produce byte-identical plans.
pub struct NextRunPlanner {
    universe_cap: Option<usize>,
}

impl NextRunPlanner {
    pub fn new() -> Self {
        Self { universe_cap: None }
    }

    /// Bounds the store universe the solver may search over; above the
    /// cap the run fails fast instead of grinding through 2^U subsets.
    pub fn with_universe_cap(cap: usize) -> Self {
        Self {
            universe_cap: Some(cap),
        }
    }

    pub fn next_run(&self, snapshot: &Snapshot, today: NaiveDate) -> Result<RunPlan> {
        for item in &snapshot.items {
            item.validate_history()?;
        }

        let due_items = due::select_due(&snapshot.items, today);
        tracing::debug!(
            "{} of {} items due for the next run",
            due_items.len(),
            snapshot.items.len()
        );
        if due_items.is_empty() {
            return Ok(RunPlan::new());
        }

        let requirements: Vec<(&str, &[String])> = due_items
            .iter()
            .map(|item| (item.name.as_str(), item.stores.as_slice()))
            .collect();
        let minimum_stores = hitting_set::min_hitting_set(&requirements, self.universe_cap)?;
        tracing::debug!("minimal store set: {:?}", minimum_stores);

        assign::group_by_store(&due_items, &minimum_stores, snapshot)
    }
}

impl Default for NextRunPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Planner for NextRunPlanner {
    async fn plan(&self, snapshot: &Snapshot, today: NaiveDate) -> Result<RunPlan> {
        self.next_run(snapshot, today)
    }
}
