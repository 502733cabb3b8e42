//! Tauri commands for frontend integration.
//!
//! One command per UI action. Each builds a [`UiCommand`] and runs it through
//! [`InventoryApp::dispatch`], so the webview never touches the table directly.

use std::sync::Mutex;

use tauri::State;

use stockroom_inventory::{RecordForm, SortField, UpdateForm};

use crate::app::InventoryApp;
use crate::types::{UiCommand, UiResponse};

/// Application state shared with the Tauri runtime.
///
/// The mutex serializes handlers; the table is never touched by two commands at once.
pub struct AppState {
    app: Mutex<InventoryApp>,
}

impl AppState {
    pub fn new(app: InventoryApp) -> Self {
        Self {
            app: Mutex::new(app),
        }
    }

    fn run(&self, command: UiCommand) -> Result<UiResponse, String> {
        let mut app = self
            .app
            .lock()
            .map_err(|_| "inventory state is unavailable".to_string())?;
        Ok(app.dispatch(command))
    }
}

#[tauri::command]
pub fn add_item(
    item_name: String,
    quantity: String,
    price: String,
    category: String,
    state: State<'_, AppState>,
) -> Result<UiResponse, String> {
    state.run(UiCommand::Add {
        form: RecordForm::new(item_name, quantity, price, category),
    })
}

#[tauri::command]
pub fn delete_item(
    selected: Option<String>,
    state: State<'_, AppState>,
) -> Result<UiResponse, String> {
    state.run(UiCommand::Delete { selected })
}

#[tauri::command]
pub fn update_item(
    selected: Option<String>,
    quantity: String,
    price: String,
    category: String,
    state: State<'_, AppState>,
) -> Result<UiResponse, String> {
    state.run(UiCommand::Update {
        selected,
        form: UpdateForm::new(quantity, price, category),
    })
}

#[tauri::command]
pub fn search_items(term: String, state: State<'_, AppState>) -> Result<UiResponse, String> {
    state.run(UiCommand::Search { term })
}

/// `column` is the heading text of the clicked column.
#[tauri::command]
pub fn sort_items(column: String, state: State<'_, AppState>) -> Result<UiResponse, String> {
    let field = column
        .parse::<SortField>()
        .map_err(|e| format!("Invalid sort column: {e}"))?;
    state.run(UiCommand::Sort { field })
}

#[tauri::command]
pub fn save_inventory(state: State<'_, AppState>) -> Result<UiResponse, String> {
    state.run(UiCommand::Save)
}

#[tauri::command]
pub fn load_inventory(state: State<'_, AppState>) -> Result<UiResponse, String> {
    state.run(UiCommand::Load)
}

#[tauri::command]
pub fn refresh_view(state: State<'_, AppState>) -> Result<UiResponse, String> {
    state.run(UiCommand::Refresh)
}
