//! Validation errors shared by every record type.
//!
//! Each variant names the offending field so front-ends can report the exact
//! rule that was broken.

use thiserror::Error;

/// A record failed one of its invariant checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: &'static str },

    #[error("{field} must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("invalid date '{value}': expected YYYY-MM-DD ({message})")]
    InvalidDate { value: String, message: String },

    #[error("invalid date '{value}': year {year} is before 1000")]
    YearOutOfRange { value: String, year: i32 },

    #[error("invalid trip type '{value}': expected 'single' or 'round'")]
    InvalidTripType { value: String },
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    // Also rejects NaN and infinities.
    if !(value > 0.0 && value.is_finite()) {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}
