//! Ledger Use Case
//!
//! Every write runs one critical section against the repository:
//! 1. Take the store's write lock
//! 2. Load the current data
//! 3. Apply the mutation (validated by `StorageData`)
//! 4. Rebuild the weekly summaries at the configured rate
//! 5. Save and release the lock
//!
//! Reads load a fresh copy each time; nothing is cached between calls.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Expense, StorageData, Trip, TripTemplate, WeeklySummary};
use crate::domain::ports::StorageRepository;
use crate::domain::services::{calculate_weekly_summaries, unbucketed_records, Totals};
use crate::domain::value_objects::{parse_record_date, RecordRef};
use crate::error::{LedgerError, LedgerResult};

pub struct LedgerUseCase {
    repository: Arc<dyn StorageRepository>,
    rate_per_mile: f64,
}

impl LedgerUseCase {
    pub fn new(repository: Arc<dyn StorageRepository>, rate_per_mile: f64) -> Self {
        Self {
            repository,
            rate_per_mile,
        }
    }

    pub fn rate_per_mile(&self) -> f64 {
        self.rate_per_mile
    }

    pub fn location(&self) -> &Path {
        self.repository.location()
    }

    /// The stored data as it is on disk right now.
    pub fn snapshot(&self) -> LedgerResult<StorageData> {
        Ok(self.repository.load()?)
    }

    pub fn trips(&self) -> LedgerResult<Vec<Trip>> {
        Ok(self.snapshot()?.trips().to_vec())
    }

    pub fn expenses(&self) -> LedgerResult<Vec<Expense>> {
        Ok(self.snapshot()?.expenses().to_vec())
    }

    pub fn trip_templates(&self) -> LedgerResult<Vec<TripTemplate>> {
        Ok(self.snapshot()?.trip_templates().to_vec())
    }

    // Trips

    pub fn add_trip(&self, trip: Trip) -> LedgerResult<Trip> {
        let stored = self.mutate("add trip", |data| {
            let mut stored = trip.clone();
            stored.id = data.add_trip(trip)?;
            Ok(stored)
        })?;
        info!(id = %stored.id, date = %stored.date, miles = stored.miles, "added trip");
        Ok(stored)
    }

    pub fn edit_trip(&self, reference: RecordRef, trip: Trip) -> LedgerResult<Trip> {
        let stored = self.mutate("edit trip", |data| {
            let index = data.resolve_trip(reference)?;
            data.edit_trip(index, trip)?;
            Ok(data.trips()[index].clone())
        })?;
        info!(id = %stored.id, "updated trip");
        Ok(stored)
    }

    pub fn delete_trip(&self, reference: RecordRef) -> LedgerResult<Trip> {
        let removed = self.mutate("delete trip", |data| {
            let index = data.resolve_trip(reference)?;
            Ok(data.delete_trip(index)?)
        })?;
        info!(id = %removed.id, "deleted trip");
        Ok(removed)
    }

    /// Log a trip along a saved route.
    ///
    /// `template` is matched against template names first (case-insensitive),
    /// then read as an index or id.
    pub fn add_trip_from_template(
        &self,
        template: &str,
        date: &str,
        miles: f64,
    ) -> LedgerResult<Trip> {
        let stored = self.mutate("add trip from template", |data| {
            let index = resolve_template_key(data, template)?;
            let trip = data.trip_templates()[index].instantiate(date, miles);
            let mut stored = trip.clone();
            stored.id = data.add_trip(trip)?;
            Ok(stored)
        })?;
        info!(id = %stored.id, template, "added trip from template");
        Ok(stored)
    }

    // Expenses

    pub fn add_expense(&self, expense: Expense) -> LedgerResult<Expense> {
        let stored = self.mutate("add expense", |data| {
            let mut stored = expense.clone();
            stored.id = data.add_expense(expense)?;
            Ok(stored)
        })?;
        info!(id = %stored.id, amount = stored.amount, "added expense");
        Ok(stored)
    }

    pub fn edit_expense(&self, reference: RecordRef, expense: Expense) -> LedgerResult<Expense> {
        let stored = self.mutate("edit expense", |data| {
            let index = data.resolve_expense(reference)?;
            data.edit_expense(index, expense)?;
            Ok(data.expenses()[index].clone())
        })?;
        info!(id = %stored.id, "updated expense");
        Ok(stored)
    }

    pub fn delete_expense(&self, reference: RecordRef) -> LedgerResult<Expense> {
        let removed = self.mutate("delete expense", |data| {
            let index = data.resolve_expense(reference)?;
            Ok(data.delete_expense(index)?)
        })?;
        info!(id = %removed.id, "deleted expense");
        Ok(removed)
    }

    // Trip templates

    pub fn add_trip_template(&self, template: TripTemplate) -> LedgerResult<TripTemplate> {
        let stored = self.mutate("add trip template", |data| {
            let mut stored = template.clone();
            stored.id = data.add_trip_template(template)?;
            Ok(stored)
        })?;
        info!(id = %stored.id, name = %stored.name, "added trip template");
        Ok(stored)
    }

    pub fn edit_trip_template(
        &self,
        reference: RecordRef,
        template: TripTemplate,
    ) -> LedgerResult<TripTemplate> {
        let stored = self.mutate("edit trip template", |data| {
            let index = data.resolve_trip_template(reference)?;
            data.edit_trip_template(index, template)?;
            Ok(data.trip_templates()[index].clone())
        })?;
        info!(id = %stored.id, "updated trip template");
        Ok(stored)
    }

    pub fn delete_trip_template(&self, reference: RecordRef) -> LedgerResult<TripTemplate> {
        let removed = self.mutate("delete trip template", |data| {
            let index = data.resolve_trip_template(reference)?;
            Ok(data.delete_trip_template(index)?)
        })?;
        info!(id = %removed.id, "deleted trip template");
        Ok(removed)
    }

    // Reports

    /// Weekly summaries computed from the current records at the configured
    /// rate (the stored copies may predate a rate change).
    pub fn weekly_summaries(&self) -> LedgerResult<Vec<WeeklySummary>> {
        let data = self.snapshot()?;
        let skipped = unbucketed_records(data.trips(), data.expenses());
        if skipped > 0 {
            warn!(
                skipped,
                path = %self.location().display(),
                "records with unreadable dates left out of weekly summaries"
            );
        }
        Ok(calculate_weekly_summaries(
            data.trips(),
            data.expenses(),
            self.rate_per_mile,
        ))
    }

    /// The summary of the week containing `date`, if that week has records.
    pub fn summary_for_week(&self, date: &str) -> LedgerResult<Option<WeeklySummary>> {
        let date = parse_record_date(date)?;
        Ok(self
            .weekly_summaries()?
            .into_iter()
            .find(|summary| summary.contains(date)))
    }

    pub fn totals(&self) -> LedgerResult<Totals> {
        let data = self.snapshot()?;
        Ok(Totals::compute(
            data.trips(),
            data.expenses(),
            self.rate_per_mile,
        ))
    }

    /// Rewrite the stored summaries at the configured rate.
    pub fn recalculate(&self) -> LedgerResult<usize> {
        let count = self.mutate("recalculate", |data| {
            data.calculate_and_update_weekly_summaries(self.rate_per_mile);
            Ok(data.weekly_summaries().len())
        })?;
        info!(weeks = count, rate = self.rate_per_mile, "recalculated weekly summaries");
        Ok(count)
    }

    fn mutate<T>(
        &self,
        action: &'static str,
        apply: impl FnOnce(&mut StorageData) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let _guard = self.repository.lock()?;
        let mut data = self.repository.load()?;

        let value = apply(&mut data)?;

        data.calculate_and_update_weekly_summaries(self.rate_per_mile);
        self.repository.save(&data)?;
        debug!(
            action,
            path = %self.location().display(),
            weeks = data.weekly_summaries().len(),
            "saved ledger"
        );
        Ok(value)
    }
}

fn resolve_template_key(data: &StorageData, key: &str) -> LedgerResult<usize> {
    if let Some(index) = data.find_trip_template(key) {
        return Ok(index);
    }
    let reference: RecordRef = key.parse().map_err(|_| LedgerError::UnknownTemplate {
        name: key.trim().to_string(),
    })?;
    Ok(data.resolve_trip_template(reference)?)
}
