use chrono::{DateTime, Utc};

use crate::recipe::{Rating, RecipeRecord};

/// The hybrid rating engine.
///
/// Both functions are total and pure: numeric anomalies in the record
/// (future timestamps, garbled counters) are clamped, never rejected, so
/// no error channel is needed.
pub trait IRatingEngine: Send + Sync {
    /// Heuristic popularity score derived from cooking frequency, favorite
    /// status, age-normalized usage, and recency of last cook.
    fn auto_rating(&self, record: &RecipeRecord, now: DateTime<Utc>) -> Rating;

    /// 70/30 manual/auto blend shown as the recipe's displayed rating.
    fn final_rating(&self, manual: Rating, auto: Rating) -> Rating;
}
