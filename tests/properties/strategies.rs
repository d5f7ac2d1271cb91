//! Shared generators.

use chrono::{Days, NaiveDate};
use nannymiles::{Expense, Trip, TripType};
use proptest::prelude::*;

pub fn date() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,15}").unwrap()
}

/// Quarter steps keep every amount exactly representable.
pub fn quarters() -> impl Strategy<Value = f64> {
    (1u32..4000).prop_map(|q| f64::from(q) / 4.0)
}

pub fn trip() -> impl Strategy<Value = Trip> {
    (date(), text(), text(), quarters(), any::<bool>()).prop_map(
        |(date, origin, destination, miles, round)| {
            let kind = if round { TripType::Round } else { TripType::Single };
            Trip::new(date.format("%Y-%m-%d").to_string(), origin, destination, miles, kind)
        },
    )
}

pub fn expense() -> impl Strategy<Value = Expense> {
    (date(), quarters(), text()).prop_map(|(date, amount, description)| {
        Expense::new(date.format("%Y-%m-%d").to_string(), amount, description)
    })
}

pub fn trips() -> impl Strategy<Value = Vec<Trip>> {
    proptest::collection::vec(trip(), 0..24)
}

pub fn expenses() -> impl Strategy<Value = Vec<Expense>> {
    proptest::collection::vec(expense(), 0..24)
}
