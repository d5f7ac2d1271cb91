//! Shared behaviour of stored records.

use crate::domain::value_objects::{RecordId, ValidationError};

/// A record that lives in one of the ordered `StorageData` collections.
pub trait Record: Clone {
    /// Collection name used in error messages.
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    fn validate(&self) -> Result<(), ValidationError>;
}
