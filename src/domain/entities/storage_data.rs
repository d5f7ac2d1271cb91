//! StorageData - the aggregate root
//!
//! Holds every trip, expense and template in insertion order plus the derived
//! weekly summaries. It is a pure data structure; loading and saving are
//! handled by `StorageRepository`.
//!
//! The collections are private. Reads go through slices and every write goes
//! through the add/edit/delete operations below, which validate before they
//! touch anything: a failed call leaves the data exactly as it was.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use super::expense::Expense;
use super::record::Record;
use super::trip::Trip;
use super::trip_template::TripTemplate;
use super::weekly_summary::WeeklySummary;
use crate::domain::services::aggregation;
use crate::domain::value_objects::{RecordId, RecordRef, ValidationError};

/// Why an add/edit/delete was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{collection} index {index} is out of range ({len} stored)")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("no {collection} with id {id}")]
    NotFound {
        collection: &'static str,
        id: RecordId,
    },
}

impl MutationError {
    /// True for the "record not found" family (bad index or unknown id).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MutationError::IndexOutOfRange { .. } | MutationError::NotFound { .. }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageData {
    trips: Vec<Trip>,
    expenses: Vec<Expense>,
    trip_templates: Vec<TripTemplate>,
    weekly_summaries: Vec<WeeklySummary>,
}

impl StorageData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted collections.
    ///
    /// Records are taken as stored (a hand-edited file may hold invalid ones),
    /// but duplicate ids within a collection are replaced so every record
    /// stays addressable. When that happens the record copies inside the
    /// stored summaries are refreshed from the collections; the stored totals
    /// are kept.
    pub fn from_parts(
        trips: Vec<Trip>,
        expenses: Vec<Expense>,
        trip_templates: Vec<TripTemplate>,
        mut weekly_summaries: Vec<WeeklySummary>,
    ) -> Self {
        let (trips, trips_rekeyed) = with_unique_ids(trips);
        let (expenses, expenses_rekeyed) = with_unique_ids(expenses);
        let (trip_templates, _) = with_unique_ids(trip_templates);

        if trips_rekeyed || expenses_rekeyed {
            for summary in &mut weekly_summaries {
                summary.trips = in_week(&trips, summary, Trip::parsed_date);
                summary.expenses = in_week(&expenses, summary, Expense::parsed_date);
            }
        }

        Self {
            trips,
            expenses,
            trip_templates,
            weekly_summaries,
        }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn trip_templates(&self) -> &[TripTemplate] {
        &self.trip_templates
    }

    pub fn weekly_summaries(&self) -> &[WeeklySummary] {
        &self.weekly_summaries
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
            && self.expenses.is_empty()
            && self.trip_templates.is_empty()
            && self.weekly_summaries.is_empty()
    }

    // Trips

    pub fn add_trip(&mut self, trip: Trip) -> Result<RecordId, MutationError> {
        add_record(&mut self.trips, trip)
    }

    pub fn edit_trip(&mut self, index: usize, trip: Trip) -> Result<(), MutationError> {
        edit_record(&mut self.trips, index, trip)
    }

    pub fn delete_trip(&mut self, index: usize) -> Result<Trip, MutationError> {
        delete_record(&mut self.trips, index)
    }

    pub fn resolve_trip(&self, reference: RecordRef) -> Result<usize, MutationError> {
        resolve_record(&self.trips, reference)
    }

    // Expenses

    pub fn add_expense(&mut self, expense: Expense) -> Result<RecordId, MutationError> {
        add_record(&mut self.expenses, expense)
    }

    pub fn edit_expense(&mut self, index: usize, expense: Expense) -> Result<(), MutationError> {
        edit_record(&mut self.expenses, index, expense)
    }

    pub fn delete_expense(&mut self, index: usize) -> Result<Expense, MutationError> {
        delete_record(&mut self.expenses, index)
    }

    pub fn resolve_expense(&self, reference: RecordRef) -> Result<usize, MutationError> {
        resolve_record(&self.expenses, reference)
    }

    // Trip templates

    pub fn add_trip_template(&mut self, template: TripTemplate) -> Result<RecordId, MutationError> {
        add_record(&mut self.trip_templates, template)
    }

    pub fn edit_trip_template(
        &mut self,
        index: usize,
        template: TripTemplate,
    ) -> Result<(), MutationError> {
        edit_record(&mut self.trip_templates, index, template)
    }

    pub fn delete_trip_template(&mut self, index: usize) -> Result<TripTemplate, MutationError> {
        delete_record(&mut self.trip_templates, index)
    }

    pub fn resolve_trip_template(&self, reference: RecordRef) -> Result<usize, MutationError> {
        resolve_record(&self.trip_templates, reference)
    }

    /// Position of the template called `name` (case-insensitive, first match).
    pub fn find_trip_template(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.trip_templates
            .iter()
            .position(|t| t.name.trim().to_lowercase() == wanted)
    }

    /// Throw away the stored summaries and rebuild them from the current
    /// trips and expenses.
    pub fn calculate_and_update_weekly_summaries(&mut self, rate_per_mile: f64) {
        self.weekly_summaries =
            aggregation::calculate_weekly_summaries(&self.trips, &self.expenses, rate_per_mile);
    }
}

fn add_record<T: Record>(records: &mut Vec<T>, mut record: T) -> Result<RecordId, MutationError> {
    record.validate()?;
    let id = RecordId::generate();
    record.set_id(id);
    records.push(record);
    Ok(id)
}

fn edit_record<T: Record>(
    records: &mut [T],
    index: usize,
    mut record: T,
) -> Result<(), MutationError> {
    let len = records.len();
    let slot = records
        .get_mut(index)
        .ok_or(MutationError::IndexOutOfRange {
            collection: T::KIND,
            index,
            len,
        })?;
    record.validate()?;
    record.set_id(slot.id());
    *slot = record;
    Ok(())
}

fn delete_record<T: Record>(records: &mut Vec<T>, index: usize) -> Result<T, MutationError> {
    if index >= records.len() {
        return Err(MutationError::IndexOutOfRange {
            collection: T::KIND,
            index,
            len: records.len(),
        });
    }
    Ok(records.remove(index))
}

fn resolve_record<T: Record>(records: &[T], reference: RecordRef) -> Result<usize, MutationError> {
    match reference {
        RecordRef::Index(index) if index < records.len() => Ok(index),
        RecordRef::Index(index) => Err(MutationError::IndexOutOfRange {
            collection: T::KIND,
            index,
            len: records.len(),
        }),
        RecordRef::Id(id) => records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(MutationError::NotFound {
                collection: T::KIND,
                id,
            }),
    }
}

/// Replaces repeated ids; the flag reports whether any record changed.
fn with_unique_ids<T: Record>(mut records: Vec<T>) -> (Vec<T>, bool) {
    let mut seen = HashSet::new();
    let mut rekeyed = false;
    for record in &mut records {
        if !seen.insert(record.id()) {
            let id = RecordId::generate();
            record.set_id(id);
            seen.insert(id);
            rekeyed = true;
        }
    }
    (records, rekeyed)
}

fn in_week<T: Clone>(
    records: &[T],
    summary: &WeeklySummary,
    date: impl Fn(&T) -> Option<NaiveDate>,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| date(*record).is_some_and(|d| summary.contains(d)))
        .cloned()
        .collect()
}
