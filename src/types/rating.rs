//! Rating type with validation and parsing.
//!
//! The `Rating` newtype ensures values entered by a user are always within
//! 0.0-5.0 and land on a half-star step.

use std::fmt;
use std::str::FromStr;

/// A validated book rating (0.0-5.0 in steps of 0.5).
///
/// Ratings read back from storage are not re-validated, so `Record` keeps a
/// plain `f64`; this type is used wherever a rating is typed in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    /// Minimum valid rating.
    pub const MIN: f64 = 0.0;
    /// Maximum valid rating.
    pub const MAX: f64 = 5.0;
    /// Input granularity.
    pub const STEP: f64 = 0.5;

    /// Lowest rating, also the default for new entries.
    pub const ZERO: Rating = Rating(0.0);

    /// Create a rating, snapping to the nearest half step.
    ///
    /// Returns `None` for non-finite or out-of-range values.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return None;
        }
        let snapped = (value / Self::STEP).round() * Self::STEP;
        Some(Self(snapped.clamp(Self::MIN, Self::MAX)))
    }

    /// Get the raw rating value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(RatingError::NotANumber(value.to_string()));
        }
        Self::new(value).ok_or(RatingError::OutOfRange(value))
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: f64 = s
            .parse()
            .map_err(|_| RatingError::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

/// Error type for rating parsing and validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("rating must be a number, got '{0}'")]
    NotANumber(String),
    #[error("rating {0} is out of valid range (0.0-5.0)")]
    OutOfRange(f64),
}
