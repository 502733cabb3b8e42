//! Inventory domain module.
//!
//! This crate contains the inventory table and its business rules, implemented as
//! deterministic domain logic (no IO, no UI, no storage).

pub mod command;
pub mod record;
pub mod table;

pub use command::InventoryCommand;
pub use record::{InventoryRecord, ItemName, Price, RecordChanges, RecordForm, UpdateForm};
pub use table::{SortField, Summary, TableStore};
