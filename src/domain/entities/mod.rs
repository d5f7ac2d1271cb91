//! Domain Entities
//!
//! - `Trip` - a mileage-producing journey
//! - `Expense` - a reimbursable cost
//! - `TripTemplate` - a reusable route
//! - `WeeklySummary` - derived per-week totals
//! - `StorageData` - the aggregate root holding all of the above

mod expense;
mod record;
mod storage_data;
mod trip;
mod trip_template;
mod weekly_summary;

pub use expense::Expense;
pub use record::Record;
pub use storage_data::{MutationError, StorageData};
pub use trip::Trip;
pub use trip_template::TripTemplate;
pub(crate) use weekly_summary::null_as_empty;
pub use weekly_summary::WeeklySummary;
