pub mod assign;
pub mod due;
pub mod engine;
pub mod hitting_set;
pub mod interval;

pub use crate::domain::model::{Item, RunPlan, Snapshot, Store};
pub use crate::domain::ports::Planner;
pub use crate::utils::error::Result;
