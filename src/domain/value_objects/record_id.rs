//! Record identity
//!
//! Every trip, expense and template carries a stable id assigned when it is
//! added. Positions in the collections still work as addresses, but they shift
//! on delete; ids do not.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stable, opaque identifier of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for compact listings.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// How a caller addresses a record: by current position or by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Index(usize),
    Id(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record reference '{value}': expected an index or a record id")]
pub struct RecordRefError {
    pub value: String,
}

impl FromStr for RecordRef {
    type Err = RecordRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || RecordRefError {
            value: s.to_string(),
        };

        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed.parse().map(RecordRef::Index).map_err(|_| err());
        }

        trimmed.parse().map(RecordRef::Id).map_err(|_| err())
    }
}

impl std::fmt::Display for RecordRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordRef::Index(i) => write!(f, "#{}", i),
            RecordRef::Id(id) => write!(f, "{}", id),
        }
    }
}

impl From<usize> for RecordRef {
    fn from(index: usize) -> Self {
        RecordRef::Index(index)
    }
}

impl From<RecordId> for RecordRef {
    fn from(id: RecordId) -> Self {
        RecordRef::Id(id)
    }
}
