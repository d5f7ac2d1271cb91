//! Repository Implementations
//!
//! Concrete implementations of the `StorageRepository` port.

mod json_storage;
mod memory;

pub use json_storage::JsonStorageRepository;
pub use memory::InMemoryStorageRepository;
