//! JSON Storage Repository
//!
//! Persists `StorageData` as one indented JSON document:
//!
//! ```json
//! {
//!   "trips": [...],
//!   "expenses": [...],
//!   "weekly_summaries": [...],
//!   "trip_templates": [...]
//! }
//! ```
//!
//! Missing or `null` collections load as empty lists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    null_as_empty, Expense, StorageData, Trip, TripTemplate, WeeklySummary,
};
use crate::domain::ports::{StorageError, StorageRepository, WriteGuard};
use crate::infrastructure::fs::{atomic_write, default_data_file, read_if_exists, LockFile};

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    trips: Vec<Trip>,
    #[serde(default, deserialize_with = "null_as_empty")]
    expenses: Vec<Expense>,
    #[serde(default, deserialize_with = "null_as_empty")]
    weekly_summaries: Vec<WeeklySummary>,
    #[serde(default, deserialize_with = "null_as_empty")]
    trip_templates: Vec<TripTemplate>,
}

/// File-backed repository for the ledger data.
#[derive(Debug, Clone)]
pub struct JsonStorageRepository {
    path: PathBuf,
}

impl JsonStorageRepository {
    /// Repository at the default location (`~/.nannymiles/data.json`).
    pub fn new() -> Self {
        Self {
            path: default_data_file(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonStorageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageRepository for JsonStorageRepository {
    fn load(&self) -> Result<StorageData, StorageError> {
        let Some(content) =
            read_if_exists(&self.path).map_err(|e| StorageError::io(&self.path, e))?
        else {
            return Ok(StorageData::new());
        };

        let doc: JsonDocument =
            serde_json::from_str(&content).map_err(|e| StorageError::Deserialization {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(StorageData::from_parts(
            doc.trips,
            doc.expenses,
            doc.trip_templates,
            doc.weekly_summaries,
        ))
    }

    fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        let doc = JsonDocument {
            trips: data.trips().to_vec(),
            expenses: data.expenses().to_vec(),
            weekly_summaries: data.weekly_summaries().to_vec(),
            trip_templates: data.trip_templates().to_vec(),
        };

        let mut content =
            serde_json::to_string_pretty(&doc).map_err(|e| StorageError::Serialization {
                message: e.to_string(),
            })?;
        content.push('\n');

        atomic_write(&self.path, content.as_bytes()).map_err(|e| StorageError::io(&self.path, e))
    }

    fn lock(&self) -> Result<WriteGuard, StorageError> {
        let lock = LockFile::acquire(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        Ok(WriteGuard::new(lock))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
