use std::sync::Arc;

use thiserror::Error;

use stockroom_inventory::InventoryRecord;

/// Persistence failure.
///
/// Every variant is reported to the user as a file error; none of them touch the
/// in-memory table.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("inventory file not found: {0}")]
    NotFound(String),

    #[error("I/O error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed inventory file (line {line}): {message}")]
    Malformed { line: u64, message: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PersistenceError {
    pub(crate) fn io(location: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            location: location.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: u64, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }
}

/// Whole-table load/save boundary.
///
/// Implementations must:
/// - write every record, in table order, on `save`
/// - return `PersistenceError::NotFound` from `load` when nothing was ever saved
/// - never return a partially parsed record set
pub trait InventoryRepository: Send + Sync {
    fn save(&self, records: &[InventoryRecord]) -> Result<(), PersistenceError>;

    fn load(&self) -> Result<Vec<InventoryRecord>, PersistenceError>;

    /// Human-readable location (file path, "memory", ...) for logs and messages.
    fn location(&self) -> String;
}

impl<S> InventoryRepository for Arc<S>
where
    S: InventoryRepository + ?Sized,
{
    fn save(&self, records: &[InventoryRecord]) -> Result<(), PersistenceError> {
        (**self).save(records)
    }

    fn load(&self) -> Result<Vec<InventoryRecord>, PersistenceError> {
        (**self).load()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

impl<S> InventoryRepository for Box<S>
where
    S: InventoryRepository + ?Sized,
{
    fn save(&self, records: &[InventoryRecord]) -> Result<(), PersistenceError> {
        (**self).save(records)
    }

    fn load(&self) -> Result<Vec<InventoryRecord>, PersistenceError> {
        (**self).load()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
