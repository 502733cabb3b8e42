//! `stockroom-desktop`
//!
//! **Responsibility:** desktop shell around the inventory table.
//!
//! This crate provides:
//! - Command dispatch from UI actions into the table ([`app::InventoryApp`])
//! - The view adapter that turns table contents into display rows ([`view`])
//! - Modal notifications for success and failure ([`notification`])
//! - Optional Tauri window (`tauri` feature)

pub mod app;
pub mod error;
pub mod notification;
pub mod types;
pub mod view;

#[cfg(feature = "tauri")]
pub mod commands;

pub use app::InventoryApp;
pub use error::{AppError, ErrorKind};
pub use notification::{Notification, NotificationLevel};
pub use types::{UiCommand, UiResponse};
pub use view::{InventoryRow, InventoryView};
