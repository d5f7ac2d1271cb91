//! Error types for nannymiles
//!
//! Each layer owns a `thiserror` enum; `LedgerError` is the sum the
//! application layer returns.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::entities::MutationError;
use crate::domain::ports::StorageError;
use crate::domain::value_objects::{RecordRefError, ValidationError};

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// A record failed validation or could not be found
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// Reading or writing the data file failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A reference that is neither an index nor a record id
    #[error(transparent)]
    InvalidRecordRef(#[from] RecordRefError),

    #[error("no trip template named '{name}'")]
    UnknownTemplate { name: String },
}

impl From<ValidationError> for LedgerError {
    fn from(err: ValidationError) -> Self {
        LedgerError::Mutation(MutationError::Validation(err))
    }
}

impl LedgerError {
    /// The caller supplied bad input (fixable by re-entering it).
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Mutation(MutationError::Validation(_)))
    }

    /// The addressed record does not exist. A reference that is neither an
    /// index nor an id cannot address one either.
    pub fn is_not_found(&self) -> bool {
        match self {
            LedgerError::Mutation(err) => err.is_not_found(),
            LedgerError::UnknownTemplate { .. } | LedgerError::InvalidRecordRef(_) => true,
            _ => false,
        }
    }
}
