//! Typed mutations of the inventory table.

use serde::{Deserialize, Serialize};

use crate::record::{InventoryRecord, ItemName, RecordChanges};

/// A validated mutation, ready to be executed against a [`crate::TableStore`].
///
/// Commands are only built from already-parsed values, so executing one can fail on
/// key rules (duplicate / missing name) but never on input format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryCommand {
    Insert {
        record: InventoryRecord,
    },
    Delete {
        item_name: ItemName,
    },
    Update {
        item_name: ItemName,
        changes: RecordChanges,
    },
}

impl InventoryCommand {
    pub fn command_type(&self) -> &'static str {
        match self {
            InventoryCommand::Insert { .. } => "inventory.insert",
            InventoryCommand::Delete { .. } => "inventory.delete",
            InventoryCommand::Update { .. } => "inventory.update",
        }
    }
}
