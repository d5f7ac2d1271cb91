//! Property tests for weekly bucketing.

use chrono::{Datelike, Weekday};
use proptest::prelude::*;

use nannymiles::domain::services::{
    calculate_reimbursement, calculate_total_expenses, calculate_total_miles,
    calculate_weekly_summaries,
};
use nannymiles::domain::value_objects::{week_end, week_start};
use nannymiles::StorageData;

use crate::strategies::{date, expenses, trips};

const RATE: f64 = 0.70;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every date falls in the Sunday-to-Saturday week around it.
    #[test]
    fn property_week_start_is_sunday_on_or_before(d in date()) {
        let start = week_start(d);
        prop_assert_eq!(start.weekday(), Weekday::Sun);
        prop_assert!(start <= d);
        prop_assert!(d <= week_end(start));
        prop_assert_eq!(week_end(start).weekday(), Weekday::Sat);
    }

    /// PROPERTY: summaries partition the records and conserve every total.
    #[test]
    fn property_summaries_account_for_every_record(trips in trips(), expenses in expenses()) {
        let summaries = calculate_weekly_summaries(&trips, &expenses, RATE);

        let trip_count: usize = summaries.iter().map(|s| s.trips.len()).sum();
        let expense_count: usize = summaries.iter().map(|s| s.expenses.len()).sum();
        prop_assert_eq!(trip_count, trips.len());
        prop_assert_eq!(expense_count, expenses.len());

        let miles: f64 = summaries.iter().map(|s| s.total_miles).sum();
        let owed: f64 = summaries.iter().map(|s| s.total_amount).sum();
        let spent: f64 = summaries.iter().map(|s| s.total_expenses).sum();
        prop_assert!(close(miles, calculate_total_miles(&trips)));
        prop_assert!(close(owed, calculate_reimbursement(&trips, RATE)));
        prop_assert!(close(spent, calculate_total_expenses(&expenses)));
    }

    /// PROPERTY: weeks are distinct, ordered, and hold only their own dates.
    #[test]
    fn property_summaries_are_ordered_and_contain_their_records(
        trips in trips(),
        expenses in expenses(),
    ) {
        let summaries = calculate_weekly_summaries(&trips, &expenses, RATE);

        for pair in summaries.windows(2) {
            prop_assert!(pair[0].week_start < pair[1].week_start);
        }
        for summary in &summaries {
            prop_assert!(!summary.trips.is_empty() || !summary.expenses.is_empty());
            for trip in &summary.trips {
                prop_assert!(summary.contains(trip.parsed_date().unwrap()));
            }
            for expense in &summary.expenses {
                prop_assert!(summary.contains(expense.parsed_date().unwrap()));
            }
        }
    }

    /// PROPERTY: recomputing the stored summaries twice changes nothing.
    #[test]
    fn property_recompute_is_idempotent(trips in trips(), expenses in expenses()) {
        let mut data = StorageData::new();
        for trip in trips {
            data.add_trip(trip).unwrap();
        }
        for expense in expenses {
            data.add_expense(expense).unwrap();
        }

        data.calculate_and_update_weekly_summaries(RATE);
        let once = data.clone();
        data.calculate_and_update_weekly_summaries(RATE);

        prop_assert_eq!(data, once);
    }
}
