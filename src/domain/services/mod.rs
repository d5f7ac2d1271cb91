//! Domain Services
//!
//! Stateless business logic that operates on domain entities.
//!
//! - `aggregation` - mileage/expense totals and weekly bucketing

pub mod aggregation;

pub use aggregation::{
    calculate_reimbursement, calculate_total_expenses, calculate_total_miles,
    calculate_weekly_summaries, unbucketed_records, Totals,
};
