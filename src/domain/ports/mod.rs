//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod storage_repository;

pub use storage_repository::{StorageError, StorageRepository, WriteGuard};
