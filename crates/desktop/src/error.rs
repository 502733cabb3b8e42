//! Application-level error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_infra::PersistenceError;

/// Coarse failure category shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Empty required field, non-integer quantity, non-numeric price.
    Validation,
    /// Add with a name that already exists.
    DuplicateKey,
    /// Update/delete with no selection or a missing record.
    NotFound,
    /// Load target absent or an I/O failure.
    File,
}

/// Anything a user action can fail with. None of these end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("no item selected")]
    NoSelection,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(DomainError::Incomplete(_) | DomainError::Validation(_)) => {
                ErrorKind::Validation
            }
            AppError::Domain(DomainError::DuplicateKey(_)) => ErrorKind::DuplicateKey,
            AppError::Domain(DomainError::NotFound(_)) | AppError::NoSelection => {
                ErrorKind::NotFound
            }
            AppError::Persistence(_) => ErrorKind::File,
        }
    }
}
