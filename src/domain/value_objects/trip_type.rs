//! Trip type value object
//!
//! - `Single`: one leg, credited at face value
//! - `Round`: there and back, credited at twice the leg distance
//!
//! Stored values go through the same parser as CLI and API input, so older
//! files that wrote `"Round"` still load. An empty stored value reads as
//! `Single`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Whether a trip is one-way or a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TripType {
    #[default]
    Single,
    Round,
}

impl TripType {
    /// Factor applied to the leg distance when totalling miles.
    pub fn multiplier(&self) -> f64 {
        match self {
            TripType::Single => 1.0,
            TripType::Round => 2.0,
        }
    }

    pub fn is_round(&self) -> bool {
        matches!(self, TripType::Round)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Single => "single",
            TripType::Round => "round",
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Err(ValidationError::EmptyField { field: "type" }),
            "single" => Ok(TripType::Single),
            "round" => Ok(TripType::Round),
            _ => Err(ValidationError::InvalidTripType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TripType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Ok(TripType::default());
        }
        value.parse()
    }
}
