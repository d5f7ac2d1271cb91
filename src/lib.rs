//! nannymiles - mileage and expense ledger for nannies
//!
//! Records trips, reimbursable expenses and reusable trip templates in a
//! single JSON file, and derives per-week (Sunday to Saturday) summaries of
//! miles, mileage reimbursement and expenses.
//!
//! Layers:
//! - `domain` - entities, aggregation rules, the storage port
//! - `infrastructure` - JSON file and in-memory repositories
//! - `application` - `LedgerUseCase`, the locked load/mutate/save cycle
//! - `server` - REST API over the use case
//! - `config` - TOML config with `NANNYMILES_*` overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod server;

// Re-exports for convenience
pub use application::LedgerUseCase;
pub use config::{Config, ConfigError};
pub use domain::entities::{Expense, MutationError, StorageData, Trip, TripTemplate, WeeklySummary};
pub use domain::ports::{StorageError, StorageRepository};
pub use domain::services::Totals;
pub use domain::value_objects::{RecordId, RecordRef, TripType, ValidationError};
pub use error::{LedgerError, LedgerResult};
pub use infrastructure::{InMemoryStorageRepository, JsonStorageRepository};
