//! Application state and command handlers.
//!
//! Control flow for every action: parse form input → mutate the table → render.
//! A failed step returns an error notification and leaves the table untouched.

use stockroom_infra::{AppConfig, CsvFileRepository, InventoryRepository};
use stockroom_inventory::{
    InventoryCommand, ItemName, RecordForm, SortField, TableStore, UpdateForm,
};

use crate::error::AppError;
use crate::notification::Notification;
use crate::types::{UiCommand, UiResponse};
use crate::view::{self, InventoryView};

/// The inventory application: owns the table and its persistence target.
#[derive(Debug)]
pub struct InventoryApp<R = CsvFileRepository> {
    table: TableStore,
    repository: R,
}

impl InventoryApp<CsvFileRepository> {
    /// Empty table saving to / loading from the configured CSV file.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_repository(CsvFileRepository::new(config.csv_path.clone()))
    }
}

impl<R: InventoryRepository> InventoryApp<R> {
    pub fn with_repository(repository: R) -> Self {
        Self {
            table: TableStore::new(),
            repository,
        }
    }

    pub fn table(&self) -> &TableStore {
        &self.table
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Run one user action to completion. Never fails; errors become notifications.
    pub fn dispatch(&mut self, command: UiCommand) -> UiResponse {
        let name = command.name();
        match self.handle(command) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(command = name, kind = ?err.kind(), error = %err, "command rejected");
                UiResponse::notify(Notification::from_error(&err))
            }
        }
    }

    fn handle(&mut self, command: UiCommand) -> Result<UiResponse, AppError> {
        match command {
            UiCommand::Add { form } => self.add_item(&form),
            UiCommand::Delete { selected } => self.delete_item(selected.as_deref()),
            UiCommand::Update { selected, form } => self.update_item(selected.as_deref(), &form),
            UiCommand::Search { term } => Ok(UiResponse::view(self.search(&term))),
            UiCommand::Sort { field } => Ok(UiResponse::view(self.sort(field))),
            UiCommand::Save => self.save(),
            UiCommand::Load => self.load(),
            UiCommand::Refresh => Ok(UiResponse::view(self.render_all())),
        }
    }

    pub fn add_item(&mut self, form: &RecordForm) -> Result<UiResponse, AppError> {
        let record = form.parse()?;
        let item_name = record.item_name().clone();
        self.table.execute(InventoryCommand::Insert { record })?;

        tracing::info!(item = %item_name, rows = self.table.len(), "item added");
        Ok(UiResponse::view(self.render_all()))
    }

    pub fn delete_item(&mut self, selected: Option<&str>) -> Result<UiResponse, AppError> {
        let item_name = selected_item(selected)?;
        self.table.execute(InventoryCommand::Delete {
            item_name: item_name.clone(),
        })?;

        tracing::info!(item = %item_name, rows = self.table.len(), "item deleted");
        Ok(UiResponse::view(self.render_all()))
    }

    pub fn update_item(
        &mut self,
        selected: Option<&str>,
        form: &UpdateForm,
    ) -> Result<UiResponse, AppError> {
        let item_name = selected_item(selected)?;
        let changes = form.parse()?;
        self.table.execute(InventoryCommand::Update {
            item_name: item_name.clone(),
            changes,
        })?;

        tracing::info!(item = %item_name, "item updated");
        Ok(UiResponse::view(self.render_all()))
    }

    /// Rows whose name contains `term` (case-insensitive); all rows for an empty term.
    pub fn search(&self, term: &str) -> InventoryView {
        view::render(self.table.filter(term), self.table.summary())
    }

    /// Reorder the table by `field` and render it.
    pub fn sort(&mut self, field: SortField) -> InventoryView {
        self.table.sort(field);
        tracing::debug!(%field, "table sorted");
        self.render_all()
    }

    pub fn save(&self) -> Result<UiResponse, AppError> {
        self.repository.save(self.table.records())?;
        Ok(UiResponse::notify(Notification::saved(
            &self.repository.location(),
        )))
    }

    /// Replace the whole table with the repository contents.
    pub fn load(&mut self) -> Result<UiResponse, AppError> {
        let records = self.repository.load()?;
        self.table.replace_all(records)?;

        let location = self.repository.location();
        tracing::info!(source = %location, rows = self.table.len(), "table replaced from file");
        Ok(UiResponse::view(self.render_all())
            .with_notification(Notification::loaded(&location, self.table.len())))
    }

    pub fn render_all(&self) -> InventoryView {
        view::render(self.table.records(), self.table.summary())
    }
}

/// The selected row's name; a missing or blank selection is an error.
fn selected_item(selected: Option<&str>) -> Result<ItemName, AppError> {
    match selected.map(str::trim) {
        None | Some("") => Err(AppError::NoSelection),
        Some(name) => ItemName::parse(name).map_err(AppError::from),
    }
}
