//! Trip entity - a single mileage-producing journey

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::domain::value_objects::{
    parse_record_date, require_positive, require_text, RecordId, TripType, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Files written before ids existed get a fresh one on load.
    #[serde(default = "RecordId::generate")]
    pub id: RecordId,
    pub origin: String,
    pub destination: String,
    /// Distance of one leg.
    pub miles: f64,
    pub date: String,
    #[serde(default, rename = "type")]
    pub trip_type: TripType,
}

impl Trip {
    pub fn new(
        date: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        miles: f64,
        trip_type: TripType,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            origin: origin.into(),
            destination: destination.into(),
            miles,
            date: date.into(),
            trip_type,
        }
    }

    /// Miles credited toward totals: the leg distance, doubled for round trips.
    pub fn effective_miles(&self) -> f64 {
        self.miles * self.trip_type.multiplier()
    }

    /// The trip date, or `None` when it does not parse.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_record_date(&self.date).ok()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("origin", &self.origin)?;
        require_text("destination", &self.destination)?;
        parse_record_date(&self.date)?;
        require_positive("miles", self.miles)?;
        Ok(())
    }
}

impl Record for Trip {
    const KIND: &'static str = "trip";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Trip::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> Trip {
        Trip::new("2024-03-20", "Home", "School", 5.0, TripType::Single)
    }

    #[test]
    fn valid_trip_passes() {
        assert!(trip().validate().is_ok());
    }

    #[test]
    fn empty_origin_is_rejected() {
        let t = Trip {
            origin: String::new(),
            destination: "X".to_string(),
            ..trip()
        };
        assert_eq!(
            t.validate(),
            Err(ValidationError::EmptyField { field: "origin" })
        );
    }

    #[test]
    fn empty_destination_is_rejected() {
        let t = Trip {
            destination: " ".to_string(),
            ..trip()
        };
        assert_eq!(
            t.validate(),
            Err(ValidationError::EmptyField {
                field: "destination"
            })
        );
    }

    #[test]
    fn negative_and_zero_miles_are_rejected() {
        for miles in [-1.0, 0.0] {
            let t = Trip { miles, ..trip() };
            assert!(matches!(
                t.validate(),
                Err(ValidationError::NotPositive { field: "miles", .. })
            ));
        }
    }

    #[test]
    fn bad_dates_are_rejected() {
        for date in ["", "yesterday", "2024-13-01", "0999-01-01"] {
            let t = Trip {
                date: date.to_string(),
                ..trip()
            };
            assert!(t.validate().is_err(), "{date:?} should be rejected");
        }
    }

    #[test]
    fn round_trip_doubles_effective_miles() {
        let t = Trip {
            trip_type: TripType::Round,
            ..trip()
        };
        assert_eq!(t.effective_miles(), 10.0);
        assert_eq!(trip().effective_miles(), 5.0);
    }

    #[test]
    fn json_uses_type_key() {
        let json = serde_json::to_value(trip()).unwrap();
        assert_eq!(json["type"], "single");
        assert_eq!(json["origin"], "Home");
        assert!(json.get("trip_type").is_none());
    }

    #[test]
    fn missing_id_is_generated_on_deserialize() {
        let t: Trip = serde_json::from_str(
            r#"{"origin":"A","destination":"B","miles":3.5,"date":"2024-01-02","type":"round"}"#,
        )
        .unwrap();
        assert_eq!(t.trip_type, TripType::Round);
        assert_eq!(t.miles, 3.5);
    }
}
