//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// key uniqueness, missing records). IO failures belong to the persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required input was left empty.
    #[error("incomplete input: {0}")]
    Incomplete(String),

    /// A value failed validation (e.g. malformed number, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A record with the same key already exists.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The addressed record does not exist (or nothing was selected).
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn incomplete(msg: impl Into<String>) -> Self {
        Self::Incomplete(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey(key.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
