//! Blocking message dialogs.

use serde::{Deserialize, Serialize};

use stockroom_core::DomainError;
use stockroom_infra::PersistenceError;

use crate::error::{AppError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A modal message for the user: a titled dialog with one line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    /// Set for error dialogs.
    pub kind: Option<ErrorKind>,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            message: message.into(),
            kind: None,
        }
    }

    pub fn error(kind: ErrorKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            message: message.into(),
            kind: Some(kind),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }

    pub fn saved(location: &str) -> Self {
        Self::info("Save", format!("Inventory saved to CSV successfully ({location})."))
    }

    pub fn loaded(location: &str, rows: usize) -> Self {
        Self::info(
            "Load",
            format!("Inventory loaded from CSV successfully ({rows} items from {location})."),
        )
    }

    /// Dialog for a failed user action.
    pub fn from_error(err: &AppError) -> Self {
        let kind = err.kind();
        let (title, message) = match err {
            AppError::Domain(DomainError::Incomplete(_)) => {
                ("Input Error", "All fields must be filled.".to_string())
            }
            AppError::Domain(DomainError::Validation(msg)) => {
                ("Invalid Input", sentence(msg))
            }
            AppError::Domain(DomainError::DuplicateKey(name)) => (
                "Duplicate Error",
                format!("Item \"{name}\" already exists in inventory."),
            ),
            AppError::Domain(DomainError::NotFound(name)) => (
                "Selection Error",
                format!("Item \"{name}\" is not in the inventory."),
            ),
            AppError::NoSelection => ("Selection Error", "No item selected.".to_string()),
            AppError::Persistence(PersistenceError::NotFound(location)) => {
                ("File Error", format!("CSV file not found: {location}"))
            }
            AppError::Persistence(other) => ("File Error", sentence(&other.to_string())),
        };
        Self::error(kind, title, message)
    }
}

/// Capitalize the first letter and end with a period.
fn sentence(msg: &str) -> String {
    let mut chars = msg.chars();
    let mut out: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}
