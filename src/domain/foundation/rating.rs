//! Rating value object for the five-point survey questions (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Five-point Likert rating: 1 (not at all) to 5 (completely).
///
/// Serialized as its bare number so it matches the survey payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Rating {
    VeryLow = 1,
    Low = 2,
    Moderate = 3,
    High = 4,
    VeryHigh = 5,
}

impl Rating {
    /// Lowest selectable value.
    pub const MIN: u8 = 1;
    /// Highest selectable value.
    pub const MAX: u8 = 5;

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Rating::VeryLow),
            2 => Ok(Rating::Low),
            3 => Ok(Rating::Moderate),
            4 => Ok(Rating::High),
            5 => Ok(Rating::VeryHigh),
            _ => Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i64,
                Self::MAX as i64,
                value as i64,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// All ratings in ascending order, as shown on the scale.
    pub fn all() -> [Rating; 5] {
        [
            Rating::VeryLow,
            Rating::Low,
            Rating::Moderate,
            Rating::High,
            Rating::VeryHigh,
        ]
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The two survey answers: personal willingness and team readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPair {
    pub personal: Rating,
    pub team: Rating,
}

impl RatingPair {
    pub fn new(personal: Rating, team: Rating) -> Self {
        Self { personal, team }
    }

    /// Validates raw numbers, reporting which answer was out of range.
    pub fn try_from_raw(personal: u8, team: u8) -> Result<Self, ValidationError> {
        let personal = Rating::try_from_u8(personal).map_err(|_| {
            ValidationError::out_of_range(
                "personal_rating",
                Rating::MIN as i64,
                Rating::MAX as i64,
                personal as i64,
            )
        })?;
        let team = Rating::try_from_u8(team).map_err(|_| {
            ValidationError::out_of_range(
                "team_rating",
                Rating::MIN as i64,
                Rating::MAX as i64,
                team as i64,
            )
        })?;
        Ok(Self { personal, team })
    }
}
