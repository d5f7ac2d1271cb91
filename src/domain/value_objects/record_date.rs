//! Record dates and calendar weeks
//!
//! Records keep their date as ISO `YYYY-MM-DD` text so a hand-edited data file
//! with a bad date still loads. Parsing happens during validation and when
//! records are bucketed into weeks.

use chrono::{Datelike, Days, NaiveDate};

use super::validation::ValidationError;

/// Format used for every date the ledger reads or writes.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1000;

/// Parse and range-check a record date.
pub fn parse_record_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "date" });
    }

    let date =
        NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| ValidationError::InvalidDate {
            value: raw.to_string(),
            message: e.to_string(),
        })?;

    if date.year() < MIN_YEAR {
        return Err(ValidationError::YearOutOfRange {
            value: raw.to_string(),
            year: date.year(),
        });
    }

    Ok(date)
}

/// Format a date the way records store it.
pub fn format_record_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}

/// The Saturday closing the week that starts on `start`.
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
}
