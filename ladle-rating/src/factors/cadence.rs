use chrono::{DateTime, Utc};
use ladle_core::constants::CADENCE_WEEK_DAYS;
use ladle_core::RecipeRecord;

use super::days_elapsed;

/// Age-usage ratio: cook count normalized to a weekly cadence over the
/// record's lifetime.
///
/// Formula: `min(timesCooked / max(daysSinceCreated / 7, 1), 1)` once the
/// record is at least a day old; on creation day, `min(timesCooked, 1)`.
/// Range: 0.0 – 1.0 (capped). A `created_at` in the future reads as age
/// zero.
pub fn calculate(record: &RecipeRecord, now: DateTime<Utc>) -> f64 {
    let days_since_created = days_elapsed(now, record.created_at);
    let times_cooked = record.times_cooked as f64;

    if days_since_created > 0.0 {
        let weeks = (days_since_created / CADENCE_WEEK_DAYS).max(1.0);
        (times_cooked / weeks).min(1.0)
    } else {
        times_cooked.min(1.0)
    }
}
