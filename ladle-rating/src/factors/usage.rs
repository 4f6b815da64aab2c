use ladle_core::constants::{USAGE_FACTOR_CAP, USAGE_SATURATION_COOKS};
use ladle_core::RecipeRecord;

/// Usage factor.
///
/// Formula: `min(timesCooked / 10, 1) × 2`
/// Range: 0.0 – 2.0 (capped). Saturates at ten cooks.
pub fn calculate(record: &RecipeRecord) -> f64 {
    (record.times_cooked as f64 / USAGE_SATURATION_COOKS).min(1.0) * USAGE_FACTOR_CAP
}
