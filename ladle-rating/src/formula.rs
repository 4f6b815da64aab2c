use chrono::{DateTime, Utc};
use ladle_core::constants::{AUTO_WEIGHT, MANUAL_WEIGHT};
use ladle_core::{Rating, RecipeRecord};

use crate::factors;

/// 4-factor additive auto-rating formula.
///
/// ```text
/// autoRating = clamp(round(usage + favorite + cadence + recency), 1, 5)
/// ```
///
/// Factor caps: usage 2.0, favorite 1.0, cadence 1.0, recency 1.0, so the
/// raw score sits in [0.0, 5.0] before rounding. Rounding is
/// half-away-from-zero (all scores are non-negative).
pub fn compute(record: &RecipeRecord, now: DateTime<Utc>) -> Rating {
    let raw = factors::usage::calculate(record)
        + factors::favorite::calculate(record)
        + factors::cadence::calculate(record, now)
        + factors::recency::calculate(record, now);
    Rating::from_raw_score(raw)
}

/// Final displayed rating: fixed 70/30 manual/auto blend.
///
/// `clamp(round(0.7·manual + 0.3·auto), 1, 5)`, round-half-up.
pub fn blend(manual: Rating, auto: Rating) -> Rating {
    Rating::from_raw_score(MANUAL_WEIGHT * f64::from(manual) + AUTO_WEIGHT * f64::from(auto))
}

/// Each factor individually, for debugging/observability.
#[derive(Debug, Clone)]
pub struct RatingBreakdown {
    pub usage: f64,
    pub favorite: f64,
    pub cadence: f64,
    pub recency: f64,
    pub raw_score: f64,
    pub auto_rating: Rating,
}

/// Compute the auto rating with a full breakdown of each factor.
pub fn compute_breakdown(record: &RecipeRecord, now: DateTime<Utc>) -> RatingBreakdown {
    let usage = factors::usage::calculate(record);
    let favorite = factors::favorite::calculate(record);
    let cadence = factors::cadence::calculate(record, now);
    let recency = factors::recency::calculate(record, now);
    let raw_score = usage + favorite + cadence + recency;

    RatingBreakdown {
        usage,
        favorite,
        cadence,
        recency,
        raw_score,
        auto_rating: Rating::from_raw_score(raw_score),
    }
}
