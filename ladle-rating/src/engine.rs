use chrono::{DateTime, Utc};
use ladle_core::traits::IRatingEngine;
use ladle_core::{Rating, RecipeRecord};

use crate::formula;

/// Rating engine implementing the 4-factor additive auto-rating formula
/// and the 70/30 manual/auto blend.
///
/// The formula is fixed and heuristic — deliberately not tunable at
/// runtime — so the engine carries no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingEngine;

impl RatingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Auto rating with a per-factor breakdown, for observability.
    pub fn breakdown(&self, record: &RecipeRecord, now: DateTime<Utc>) -> formula::RatingBreakdown {
        formula::compute_breakdown(record, now)
    }
}

impl IRatingEngine for RatingEngine {
    fn auto_rating(&self, record: &RecipeRecord, now: DateTime<Utc>) -> Rating {
        formula::compute(record, now)
    }

    fn final_rating(&self, manual: Rating, auto: Rating) -> Rating {
        formula::blend(manual, auto)
    }
}
