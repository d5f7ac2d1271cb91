//! StorageRepository port
//!
//! Loads and saves the whole `StorageData` aggregate. The data file is the
//! only source of truth; there is no per-record storage.

use std::path::{Path, PathBuf};

use crate::domain::entities::StorageData;

pub trait StorageRepository: Send + Sync {
    /// Read the stored data. A missing store yields empty collections.
    fn load(&self) -> Result<StorageData, StorageError>;

    /// Replace the stored data with `data`.
    fn save(&self, data: &StorageData) -> Result<(), StorageError>;

    /// Take the single-writer lock. Hold the guard across a
    /// load-mutate-save cycle; dropping it releases the lock.
    fn lock(&self) -> Result<WriteGuard, StorageError>;

    /// Where the data lives, for messages.
    fn location(&self) -> &Path;
}

/// Exclusive write access to a store, released on drop.
pub struct WriteGuard {
    _held: Box<dyn Send>,
}

impl WriteGuard {
    pub fn new(held: impl Send + 'static) -> Self {
        Self {
            _held: Box::new(held),
        }
    }
}

impl std::fmt::Debug for WriteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteGuard").finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("failed to access data file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to serialize data: {message}")]
    Serialization { message: String },

    #[error(
        "data file corrupted: {path}\n  → Fix: repair the JSON or restore a backup\n  → Details: {message}"
    )]
    Deserialization { path: PathBuf, message: String },
}

impl StorageError {
    pub(crate) fn io(path: &Path, err: std::io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
