use crate::utils::error::{ErrandsError, Result};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Smallest set of stores that intersects every requirement's store list.
///
/// Each requirement is `(item name, allowed stores)`; the item name is only
/// used to report unsatisfiable input. The universe is the sorted union of
/// all store names, and candidate sets are enumerated by increasing size in
/// lexicographic combination order, so the result is fully deterministic:
/// among equal-size hitting sets the first enumerated one wins.
///
/// Worst case is O(2^U) in the universe size U, which is fine for the
/// tens of stores a personal catalog holds. `universe_cap` bounds U and
/// fails fast instead of letting the search run unbounded.
pub fn min_hitting_set(
    requirements: &[(&str, &[String])],
    universe_cap: Option<usize>,
) -> Result<Vec<String>> {
    if requirements.is_empty() {
        return Ok(Vec::new());
    }

    // An empty store list can never be hit, so the search would exhaust
    // every k and return garbage. Report the offending item upfront.
    for (item, stores) in requirements {
        if stores.is_empty() {
            return Err(ErrandsError::UnassignableItem {
                item: (*item).to_string(),
            });
        }
    }

    let universe: Vec<&str> = requirements
        .iter()
        .flat_map(|(_, stores)| stores.iter().map(String::as_str))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .collect();

    if let Some(cap) = universe_cap {
        if universe.len() > cap {
            return Err(ErrandsError::SearchSpaceExceeded {
                universe: universe.len(),
                cap,
            });
        }
    }

    let hits_all = |combo: &[&str]| {
        requirements
            .iter()
            .all(|(_, stores)| stores.iter().any(|s| combo.contains(&s.as_str())))
    };

    for size in 1..universe.len() {
        for combo in universe.iter().copied().combinations(size) {
            if hits_all(&combo) {
                return Ok(combo.into_iter().map(str::to_string).collect());
            }
        }
    }

    // Every store list is non-empty and drawn from the universe, so the
    // full universe always hits.
    Ok(universe.into_iter().map(str::to_string).collect())
}
