use crate::utils::error::{ErrandsError, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A store the user can buy items from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    #[serde(default)]
    pub preferred: bool,
}

/// An item the user restocks on a recurring basis.
///
/// `stores` lists the names of the stores the item may be bought from, in
/// catalog order. `purchased` holds past purchase dates, oldest first, at
/// most one per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub interval_weeks: u32,
    #[serde(default)]
    pub stores: Vec<String>,
    #[serde(default)]
    pub purchased: Vec<NaiveDate>,
}

impl Item {
    pub fn last_purchase(&self) -> Option<NaiveDate> {
        self.purchased.last().copied()
    }

    /// Checks the purchase-history invariant: strictly increasing dates.
    ///
    /// The planner rejects malformed history rather than silently
    /// normalizing it, so a corrupted catalog surfaces as a typed error.
    pub fn validate_history(&self) -> Result<()> {
        for pair in self.purchased.windows(2) {
            if pair[1] < pair[0] {
                return Err(ErrandsError::InvalidHistory {
                    item: self.name.clone(),
                    reason: format!("dates out of order: {} after {}", pair[1], pair[0]),
                });
            }
            if pair[1] == pair[0] {
                return Err(ErrandsError::InvalidHistory {
                    item: self.name.clone(),
                    reason: format!("duplicate purchase date: {}", pair[0]),
                });
            }
        }
        Ok(())
    }
}

/// Immutable view of the catalog handed to a planner: all stores and all
/// items, as loaded from the persistence layer. Planners never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Snapshot {
    pub fn is_preferred(&self, store_name: &str) -> bool {
        self.stores
            .iter()
            .any(|s| s.name == store_name && s.preferred)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }
}

/// Final planner output: store name -> item names to buy there.
///
/// Group insertion order and the item order inside each group are
/// deterministic (items keep catalog order), so two runs over the same
/// snapshot serialize identically.
pub type RunPlan = IndexMap<String, Vec<String>>;
