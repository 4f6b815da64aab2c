use ladle_core::constants::FAVORITE_BONUS;
use ladle_core::RecipeRecord;

/// Favorite bonus.
///
/// Range: 0.0 or 1.0.
pub fn calculate(record: &RecipeRecord) -> f64 {
    if record.favorite {
        FAVORITE_BONUS
    } else {
        0.0
    }
}
