//! Commands and responses exchanged with the UI layer.
//!
//! Everything here is plain serde data so it can cross the webview boundary.

use serde::{Deserialize, Serialize};

use stockroom_inventory::{RecordForm, SortField, UpdateForm};

use crate::notification::Notification;
use crate::view::InventoryView;

/// One user action. Each button / heading click maps to exactly one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiCommand {
    Add { form: RecordForm },
    Delete { selected: Option<String> },
    Update { selected: Option<String>, form: UpdateForm },
    Search { term: String },
    Sort { field: SortField },
    Save,
    Load,
    Refresh,
}

impl UiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::Add { .. } => "add",
            UiCommand::Delete { .. } => "delete",
            UiCommand::Update { .. } => "update",
            UiCommand::Search { .. } => "search",
            UiCommand::Sort { .. } => "sort",
            UiCommand::Save => "save",
            UiCommand::Load => "load",
            UiCommand::Refresh => "refresh",
        }
    }
}

/// Outcome of a dispatched command.
///
/// `view` is `None` when the displayed table should stay as it is (failed actions, save).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiResponse {
    pub view: Option<InventoryView>,
    pub notification: Option<Notification>,
}

impl UiResponse {
    pub fn view(view: InventoryView) -> Self {
        Self {
            view: Some(view),
            notification: None,
        }
    }

    pub fn notify(notification: Notification) -> Self {
        Self {
            view: None,
            notification: Some(notification),
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn is_error(&self) -> bool {
        self.notification.as_ref().is_some_and(Notification::is_error)
    }
}
