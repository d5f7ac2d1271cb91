//! Domain Layer
//!
//! The mileage ledger's business logic, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Trip, Expense, TripTemplate, WeeklySummary, StorageData
//! - `value_objects/` - dates, ids, trip types, validation errors
//! - `services/` - aggregation (totals and weekly bucketing)
//! - `ports/` - the storage interface implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **No logging** - Every public operation returns a typed result instead
//! 3. **Ports & Adapters** - Persistence goes through a trait-defined port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
