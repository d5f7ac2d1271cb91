#![no_main]

use libfuzzer_sys::fuzz_target;
use nannymiles::domain::services::{calculate_weekly_summaries, unbucketed_records};
use nannymiles::{Expense, Trip};

fuzz_target!(|data: &[u8]| {
    // Hand-edited records may hold any dates or numbers.
    let trips: Vec<Trip> = serde_json::from_slice(data).unwrap_or_default();
    let expenses: Vec<Expense> = serde_json::from_slice(data).unwrap_or_default();

    let summaries = calculate_weekly_summaries(&trips, &expenses, 0.70);
    let skipped = unbucketed_records(&trips, &expenses);
    let bucketed: usize = summaries
        .iter()
        .map(|s| s.trips.len() + s.expenses.len())
        .sum();
    assert_eq!(bucketed + skipped, trips.len() + expenses.len());
});
