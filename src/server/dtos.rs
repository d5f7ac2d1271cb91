//! Request and response bodies for the REST API

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Expense, Trip, TripTemplate};
use crate::domain::value_objects::{TripType, ValidationError};

#[derive(Debug, Deserialize)]
pub struct TripRequest {
    pub date: String,
    pub origin: String,
    pub destination: String,
    pub miles: f64,
    /// `"single"` or `"round"`; omitted means single.
    #[serde(rename = "type", default)]
    pub trip_type: Option<String>,
}

impl TripRequest {
    pub fn into_trip(self) -> Result<Trip, ValidationError> {
        let trip_type = parse_trip_type(self.trip_type.as_deref())?;
        Ok(Trip::new(
            self.date,
            self.origin,
            self.destination,
            self.miles,
            trip_type,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    pub date: String,
    pub amount: f64,
    pub description: String,
}

impl From<ExpenseRequest> for Expense {
    fn from(req: ExpenseRequest) -> Self {
        Expense::new(req.date, req.amount, req.description)
    }
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub name: String,
    pub origin: String,
    pub destination: String,
    #[serde(rename = "tripType", alias = "type", default)]
    pub trip_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TemplateRequest {
    pub fn into_template(self) -> Result<TripTemplate, ValidationError> {
        let trip_type = parse_trip_type(self.trip_type.as_deref())?;
        let template = TripTemplate::new(self.name, self.origin, self.destination, trip_type);
        Ok(match self.notes.filter(|n| !n.trim().is_empty()) {
            Some(notes) => template.with_notes(notes),
            None => template,
        })
    }
}

/// Body of `POST /templates/{ref}/trips`.
#[derive(Debug, Deserialize)]
pub struct InstantiateRequest {
    pub date: String,
    pub miles: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    /// Any date inside the wanted week.
    pub week: Option<String>,
}

/// A listed record with its current position.
#[derive(Debug, Serialize)]
pub struct Indexed<T> {
    pub index: usize,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Indexed<T> {
    pub fn enumerate(records: Vec<T>) -> Vec<Self> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Indexed { index, record })
            .collect()
    }
}

fn parse_trip_type(raw: Option<&str>) -> Result<TripType, ValidationError> {
    match raw {
        Some(raw) => raw.parse(),
        None => Ok(TripType::default()),
    }
}
