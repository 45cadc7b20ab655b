use chrono::NaiveDate;

/// Purchases needed before history overrides the user-declared interval.
pub const MIN_HISTORY_FOR_ESTIMATE: usize = 4;

/// Most recent purchases considered when averaging gaps.
pub const ESTIMATE_WINDOW: usize = 10;

/// Effective restock cadence in weeks.
///
/// With fewer than [`MIN_HISTORY_FOR_ESTIMATE`] purchases the user-declared
/// `interval_weeks` governs. Otherwise the cadence is the mean gap between
/// consecutive purchases across the last [`ESTIMATE_WINDOW`] dates, in real
/// weeks (days / 7.0, no truncation).
pub fn effective_cadence_weeks(purchased: &[NaiveDate], interval_weeks: u32) -> f64 {
    if purchased.len() < MIN_HISTORY_FOR_ESTIMATE {
        return f64::from(interval_weeks);
    }

    let start = purchased.len().saturating_sub(ESTIMATE_WINDOW);
    let window = &purchased[start..];
    if window.len() < 2 {
        // Degenerate window, fall back to the declared interval.
        return f64::from(interval_weeks);
    }

    let total_gap_days: i64 = window
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .sum();

    total_gap_days as f64 / (window.len() - 1) as f64 / 7.0
}
