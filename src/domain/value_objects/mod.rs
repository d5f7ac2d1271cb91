//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod record_date;
mod record_id;
mod trip_type;
mod validation;

pub use record_date::{
    format_record_date, parse_record_date, week_end, week_start, DATE_FORMAT, MIN_YEAR,
};
pub use record_id::{RecordId, RecordRef, RecordRefError};
pub use trip_type::TripType;
pub use validation::ValidationError;
pub(crate) use validation::{require_positive, require_text};
