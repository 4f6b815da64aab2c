use chrono::{DateTime, Utc};
use ladle_core::constants::RECENCY_WINDOW_DAYS;
use ladle_core::RecipeRecord;

use super::days_elapsed;

/// Recency factor: linear 30-day decay from the last cook.
///
/// Formula: `max(0, 1 − daysSinceCooked / 30)`; `0` when never cooked.
/// Range: 0.0 – 1.0. A `last_cooked_at` in the future reads as cooked
/// just now.
pub fn calculate(record: &RecipeRecord, now: DateTime<Utc>) -> f64 {
    match record.last_cooked_at {
        Some(last_cooked) => {
            let days_since_cooked = days_elapsed(now, last_cooked);
            (1.0 - days_since_cooked / RECENCY_WINDOW_DAYS).max(0.0)
        }
        None => 0.0,
    }
}
