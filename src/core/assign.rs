use crate::domain::model::{Item, RunPlan, Snapshot};
use crate::utils::error::{ErrandsError, Result};
use std::collections::BTreeSet;

/// Assigns each due item to one store of the hitting set and groups the
/// result into a Run Plan.
///
/// Candidates are the intersection of the item's store list with the
/// hitting set, walked in lexicographic store-name order; a preferred
/// candidate wins over the first one. Items keep catalog order inside
/// each group, and stores enter the plan in first-assignment order.
pub fn group_by_store(
    due_items: &[&Item],
    hitting_set: &[String],
    snapshot: &Snapshot,
) -> Result<RunPlan> {
    let chosen: BTreeSet<&str> = hitting_set.iter().map(String::as_str).collect();
    let mut plan = RunPlan::new();

    for item in due_items {
        let candidates: BTreeSet<&str> = item
            .stores
            .iter()
            .map(String::as_str)
            .filter(|s| chosen.contains(s))
            .collect();

        // Guaranteed non-empty when the hitting set came from this due
        // set; guard anyway so a mismatched call cannot panic.
        let Some(first) = candidates.iter().next().copied() else {
            return Err(ErrandsError::UnassignableItem {
                item: item.name.clone(),
            });
        };
        let store = candidates
            .iter()
            .copied()
            .find(|s| snapshot.is_preferred(s))
            .unwrap_or(first);

        plan.entry(store.to_string())
            .or_insert_with(Vec::new)
            .push(item.name.clone());
    }

    Ok(plan)
}
