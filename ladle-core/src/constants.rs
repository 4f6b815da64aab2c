/// Ladle system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cook count at which the usage factor saturates.
pub const USAGE_SATURATION_COOKS: f64 = 10.0;

/// Maximum contribution of the usage factor.
pub const USAGE_FACTOR_CAP: f64 = 2.0;

/// Contribution of the favorite flag when set.
pub const FAVORITE_BONUS: f64 = 1.0;

/// Week length used to normalize the age-usage cadence factor.
pub const CADENCE_WEEK_DAYS: f64 = 7.0;

/// Days over which the recency factor decays linearly to zero.
pub const RECENCY_WINDOW_DAYS: f64 = 30.0;

/// Weight of the user-supplied rating in the final blend.
pub const MANUAL_WEIGHT: f64 = 0.7;

/// Weight of the derived auto rating in the final blend.
pub const AUTO_WEIGHT: f64 = 0.3;
