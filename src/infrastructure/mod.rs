//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local disk helpers (atomic writes, lock files, default paths)
//! - `repositories/` - `StorageRepository` implementations (JSON file, memory)

pub mod fs;
pub mod repositories;

pub use repositories::{InMemoryStorageRepository, JsonStorageRepository};
