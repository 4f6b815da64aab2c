use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Integer rating clamped to [1, 5].
///
/// Used for all three rating fields: the user-supplied manual rating and
/// the two derived scores (auto and final). Serializes as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest expressible rating.
    pub const MIN: Rating = Rating(1);
    /// Highest expressible rating.
    pub const MAX: Rating = Rating(5);
    /// Manual rating seeded when the caller supplies none at creation.
    pub const DEFAULT_MANUAL: Rating = Rating(3);

    /// Create a new Rating, clamping to [1, 5].
    ///
    /// Used for derived scores, where numeric anomalies are clamped
    /// rather than rejected.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Create a Rating from user input, rejecting values outside [1, 5].
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::single(
                "manualRating",
                format!("must be between 1 and 5, got {value}"),
            ))
        }
    }

    /// Round a raw formula score half-away-from-zero, then clamp to [1, 5].
    ///
    /// All scores in the system are non-negative, so half-away-from-zero
    /// is round-half-up here. `f64::round` has exactly that behavior.
    pub fn from_raw_score(score: f64) -> Self {
        let rounded = score.round();
        if rounded <= 1.0 {
            Self::MIN
        } else if rounded >= 5.0 {
            Self::MAX
        } else {
            Self(rounded as u8)
        }
    }

    /// Get the raw integer value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clamping conversion — out-of-range persisted values heal to the nearest
/// bound instead of failing deserialization.
impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

impl From<Rating> for f64 {
    fn from(r: Rating) -> Self {
        r.0 as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_out_of_range() {
        assert_eq!(Rating::new(0), Rating::MIN);
        assert_eq!(Rating::new(9), Rating::MAX);
        assert_eq!(Rating::new(4).value(), 4);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Rating::try_new(0).is_err());
        assert!(Rating::try_new(6).is_err());
        assert_eq!(Rating::try_new(5).unwrap(), Rating::MAX);
    }

    #[test]
    fn from_raw_score_rounds_half_up() {
        assert_eq!(Rating::from_raw_score(2.5).value(), 3);
        assert_eq!(Rating::from_raw_score(3.4).value(), 3);
        assert_eq!(Rating::from_raw_score(4.5).value(), 5);
    }

    #[test]
    fn from_raw_score_clamps() {
        assert_eq!(Rating::from_raw_score(0.0), Rating::MIN);
        assert_eq!(Rating::from_raw_score(-3.0), Rating::MIN);
        assert_eq!(Rating::from_raw_score(11.2), Rating::MAX);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&Rating::new(4)).unwrap();
        assert_eq!(json, "4");
        let back: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(back.value(), 4);
    }
}
