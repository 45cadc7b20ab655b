use crate::core::interval::effective_cadence_weeks;
use crate::domain::model::Item;
use chrono::NaiveDate;

/// Planning horizon in weeks: an item counts as due if it runs out within
/// this window.
pub const LOOKAHEAD_WEEKS: f64 = 2.0;

/// Selects the items due for repurchase, preserving catalog order.
///
/// Items that were never purchased are excluded on purpose: until the
/// first purchase is logged there is no anchor date to plan from.
pub fn select_due(items: &[Item], today: NaiveDate) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| {
            let Some(last) = item.last_purchase() else {
                return false;
            };
            let cadence = effective_cadence_weeks(&item.purchased, item.interval_weeks);
            let weeks_since_last = (today - last).num_days() as f64 / 7.0;
            weeks_since_last + LOOKAHEAD_WEEKS > cadence
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, interval_weeks: u32, purchased: &[&str]) -> Item {
        Item {
            name: name.to_string(),
            interval_weeks,
            stores: vec!["Market".to_string()],
            purchased: purchased.iter().map(|s| s.parse().unwrap()).collect(),
        }
    }

    #[test]
    fn test_never_purchased_items_are_excluded() {
        let items = vec![item("Bread", 2, &[]), item("Salt", 52, &[])];
        let due = select_due(&items, "2026-08-31".parse().unwrap());
        assert!(due.is_empty());
    }

    #[test]
    fn test_item_past_interval_is_due() {
        // Purchased 10 days ago, weekly interval: 10/7 + 2 > 1.
        let items = vec![item("Milk", 1, &["2026-08-21"])];
        let due = select_due(&items, "2026-08-31".parse().unwrap());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].name, "Milk");
    }

    #[test]
    fn test_item_far_from_interval_is_not_due() {
        // Purchased yesterday, quarterly interval.
        let items = vec![item("Detergent", 12, &["2026-08-30"])];
        let due = select_due(&items, "2026-08-31".parse().unwrap());
        assert!(due.is_empty());
    }

    #[test]
    fn test_lookahead_pulls_soon_due_items_in() {
        // Purchased 8 days ago, 3-week interval: 8/7 + 2 > 3.
        let items = vec![item("Coffee", 3, &["2026-08-23"])];
        let due = select_due(&items, "2026-08-31".parse().unwrap());
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn test_due_set_preserves_catalog_order() {
        let items = vec![
            item("Coffee", 1, &["2026-08-01"]),
            item("Bread", 2, &[]),
            item("Milk", 1, &["2026-08-10"]),
        ];
        let due = select_due(&items, "2026-08-31".parse().unwrap());
        let names: Vec<&str> = due.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee", "Milk"]);
    }
}
