//! Aggregation Service
//!
//! Pure functions that total mileage, reimbursement and expenses, and group
//! records into Sunday-to-Saturday weeks.
//!
//! ## Bucketing
//!
//! 1. Records are sorted by date (stable, so same-day records keep their
//!    insertion order).
//! 2. Each record goes to the week starting on the Sunday on or before its
//!    date.
//! 3. One summary is built per week holding at least one trip or expense,
//!    oldest week first.
//!
//! Records whose date does not parse cannot be placed in a week and are left
//! out; `unbucketed_records` reports how many were skipped.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Expense, Trip, WeeklySummary};
use crate::domain::value_objects::{week_end, week_start};

/// Sum of effective miles (round trips count twice).
pub fn calculate_total_miles(trips: &[Trip]) -> f64 {
    trips.iter().map(Trip::effective_miles).sum()
}

pub fn calculate_reimbursement(trips: &[Trip], rate_per_mile: f64) -> f64 {
    calculate_total_miles(trips) * rate_per_mile
}

pub fn calculate_total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Group trips and expenses into weekly summaries, oldest week first.
pub fn calculate_weekly_summaries(
    trips: &[Trip],
    expenses: &[Expense],
    rate_per_mile: f64,
) -> Vec<WeeklySummary> {
    if trips.is_empty() && expenses.is_empty() {
        return Vec::new();
    }

    let mut weeks: BTreeMap<NaiveDate, (Vec<Trip>, Vec<Expense>)> = BTreeMap::new();

    for (date, trip) in sorted_by_date(trips, Trip::parsed_date) {
        weeks.entry(week_start(date)).or_default().0.push(trip.clone());
    }
    for (date, expense) in sorted_by_date(expenses, Expense::parsed_date) {
        weeks
            .entry(week_start(date))
            .or_default()
            .1
            .push(expense.clone());
    }

    weeks
        .into_iter()
        .map(|(start, (trips, expenses))| {
            let total_miles = calculate_total_miles(&trips);
            WeeklySummary {
                week_start: start,
                week_end: week_end(start),
                total_miles,
                total_amount: total_miles * rate_per_mile,
                total_expenses: calculate_total_expenses(&expenses),
                trips,
                expenses,
            }
        })
        .collect()
}

/// Number of records whose date cannot be bucketed into a week.
pub fn unbucketed_records(trips: &[Trip], expenses: &[Expense]) -> usize {
    let trips = trips.iter().filter(|t| t.parsed_date().is_none()).count();
    let expenses = expenses.iter().filter(|e| e.parsed_date().is_none()).count();
    trips + expenses
}

fn sorted_by_date<T>(records: &[T], date_of: fn(&T) -> Option<NaiveDate>) -> Vec<(NaiveDate, &T)> {
    let mut dated: Vec<(NaiveDate, &T)> = records
        .iter()
        .filter_map(|r| date_of(r).map(|d| (d, r)))
        .collect();
    dated.sort_by_key(|(date, _)| *date);
    dated
}

/// Overall totals across every record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub trip_count: usize,
    pub expense_count: usize,
    pub total_miles: f64,
    pub reimbursement: f64,
    pub total_expenses: f64,
    pub rate_per_mile: f64,
}

impl Totals {
    pub fn compute(trips: &[Trip], expenses: &[Expense], rate_per_mile: f64) -> Self {
        let total_miles = calculate_total_miles(trips);
        Self {
            trip_count: trips.len(),
            expense_count: expenses.len(),
            total_miles,
            reimbursement: total_miles * rate_per_mile,
            total_expenses: calculate_total_expenses(expenses),
            rate_per_mile,
        }
    }

    /// Mileage reimbursement plus expenses.
    pub fn total_owed(&self) -> f64 {
        self.reimbursement + self.total_expenses
    }
}
