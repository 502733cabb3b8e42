//! Renders table contents into display rows and summary labels.
//!
//! Rendering is a pure function of its inputs; nothing is cached between renders.

use serde::{Deserialize, Serialize};

use stockroom_inventory::{InventoryRecord, SortField, Summary};

/// One display row, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub item_name: String,
    pub quantity: u64,
    pub price: f64,
    pub category: String,
}

impl From<&InventoryRecord> for InventoryRow {
    fn from(record: &InventoryRecord) -> Self {
        Self {
            item_name: record.item_name().to_string(),
            quantity: record.quantity(),
            price: record.price().value(),
            category: record.category().to_string(),
        }
    }
}

/// Snapshot of everything the table widget shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryView {
    pub columns: Vec<String>,
    pub rows: Vec<InventoryRow>,
    pub summary: Summary,
    pub total_items_label: String,
    pub total_value_label: String,
}

impl InventoryView {
    pub fn item_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.item_name.as_str()).collect()
    }
}

/// Build a view from `records` (already filtered/sorted) and the table-wide `summary`.
pub fn render<'a, I>(records: I, summary: Summary) -> InventoryView
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    let rows: Vec<InventoryRow> = records.into_iter().map(InventoryRow::from).collect();
    tracing::debug!(rows = rows.len(), "inventory view rendered");

    InventoryView {
        columns: SortField::ALL.iter().map(|f| f.heading().to_string()).collect(),
        rows,
        summary,
        total_items_label: total_items_label(summary),
        total_value_label: total_value_label(summary),
    }
}

pub fn total_items_label(summary: Summary) -> String {
    format!("Total Items: {}", summary.total_quantity)
}

pub fn total_value_label(summary: Summary) -> String {
    format!("Total Value: {:.2}", summary.total_value)
}
