//! In-memory storage repository
//!
//! Keeps `StorageData` behind a mutex. Used by tests and by callers that
//! want a throwaway ledger. Writers are serialized by a gate that plays the
//! part of the lock file.

use std::path::Path;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use crate::domain::entities::StorageData;
use crate::domain::ports::{StorageError, StorageRepository, WriteGuard};

#[derive(Debug, Default)]
pub struct InMemoryStorageRepository {
    data: Mutex<StorageData>,
    gate: Arc<WriterGate>,
}

#[derive(Debug, Default)]
struct WriterGate {
    held: Mutex<bool>,
    released: Condvar,
}

impl WriterGate {
    fn acquire(gate: &Arc<Self>) -> GateGuard {
        let mut held = gate.held.lock().unwrap_or_else(|e| e.into_inner());
        while *held {
            held = gate.released.wait(held).unwrap_or_else(|e| e.into_inner());
        }
        *held = true;
        GateGuard(Arc::clone(gate))
    }
}

/// Reopens the gate on drop.
struct GateGuard(Arc<WriterGate>);

impl Drop for GateGuard {
    fn drop(&mut self) {
        let mut held = self.0.held.lock().unwrap_or_else(|e| e.into_inner());
        *held = false;
        self.0.released.notify_one();
    }
}

impl InMemoryStorageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: StorageData) -> Self {
        Self {
            data: Mutex::new(data),
            gate: Arc::default(),
        }
    }

    fn data(&self) -> MutexGuard<'_, StorageData> {
        // A panic while holding the lock cannot leave StorageData half-written:
        // saves replace the whole value.
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageRepository for InMemoryStorageRepository {
    fn load(&self) -> Result<StorageData, StorageError> {
        Ok(self.data().clone())
    }

    fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        *self.data() = data.clone();
        Ok(())
    }

    fn lock(&self) -> Result<WriteGuard, StorageError> {
        Ok(WriteGuard::new(WriterGate::acquire(&self.gate)))
    }

    fn location(&self) -> &Path {
        Path::new("<memory>")
    }
}
