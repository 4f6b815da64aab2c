//! The four auto-rating factors. Each is a pure function of the record and
//! (where relevant) the current time, independently capped.

pub mod cadence;
pub mod favorite;
pub mod recency;
pub mod usage;

use chrono::{DateTime, Utc};

/// Whole days elapsed from `earlier` to `now`, floored, clamped to zero.
/// Timestamps in the future read as elapsed time zero.
pub(crate) fn days_elapsed(now: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    (now - earlier).num_days().max(0) as f64
}
