//! Weekly summary - derived totals for one Sunday-to-Saturday week
//!
//! Summaries are never edited. They are rebuilt from the trip and expense
//! lists by the aggregation service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::trip::Trip;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeeklySummary {
    #[serde(with = "summary_date")]
    pub week_start: NaiveDate,
    #[serde(with = "summary_date")]
    pub week_end: NaiveDate,
    pub total_miles: f64,
    /// Reimbursement owed for `total_miles`.
    pub total_amount: f64,
    pub total_expenses: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub trips: Vec<Trip>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expenses: Vec<Expense>,
}

impl WeeklySummary {
    /// Whether `date` falls inside this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.week_start <= date && date <= self.week_end
    }

    /// Mileage reimbursement plus expenses.
    pub fn total_owed(&self) -> f64 {
        self.total_amount + self.total_expenses
    }
}

/// Accept `null` where a list is expected.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Week boundaries are written as `YYYY-MM-DD`. Older files stored full
/// RFC 3339 timestamps; those are accepted and truncated to the date.
mod summary_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::domain::value_objects::{format_record_date, DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_record_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.date_naive())
            .map_err(|e| de::Error::custom(format!("invalid week date '{}': {}", raw, e)))
    }
}
