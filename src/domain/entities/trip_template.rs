//! Trip template entity
//!
//! A reusable skeleton for trips that recur (school run, music lessons).
//! Templates carry no date or distance; those are supplied when a trip is
//! created from the template.

use serde::{Deserialize, Serialize};

use super::record::Record;
use super::trip::Trip;
use crate::domain::value_objects::{require_text, RecordId, TripType, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripTemplate {
    #[serde(default = "RecordId::generate")]
    pub id: RecordId,
    pub name: String,
    pub origin: String,
    pub destination: String,
    #[serde(default, rename = "tripType")]
    pub trip_type: TripType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TripTemplate {
    pub fn new(
        name: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        trip_type: TripType,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            origin: origin.into(),
            destination: destination.into(),
            trip_type,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build a trip on `date` covering `miles` per leg along this route.
    pub fn instantiate(&self, date: impl Into<String>, miles: f64) -> Trip {
        Trip::new(
            date,
            self.origin.clone(),
            self.destination.clone(),
            miles,
            self.trip_type,
        )
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("origin", &self.origin)?;
        require_text("destination", &self.destination)?;
        Ok(())
    }
}

impl Record for TripTemplate {
    const KIND: &'static str = "trip template";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        TripTemplate::validate(self)
    }
}
