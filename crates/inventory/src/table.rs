//! In-memory inventory table (the source of truth for the UI).

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::command::InventoryCommand;
use crate::record::{InventoryRecord, RecordChanges};

/// Column the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ItemName,
    Quantity,
    Price,
    Category,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::ItemName,
        SortField::Quantity,
        SortField::Price,
        SortField::Category,
    ];

    /// Column heading as shown in the table and written to CSV.
    pub fn heading(self) -> &'static str {
        match self {
            SortField::ItemName => "Item Name",
            SortField::Quantity => "Quantity",
            SortField::Price => "Price",
            SortField::Category => "Category",
        }
    }

    fn compare(self, a: &InventoryRecord, b: &InventoryRecord) -> Ordering {
        match self {
            SortField::ItemName => a.item_name().cmp(b.item_name()),
            SortField::Quantity => a.quantity().cmp(&b.quantity()),
            SortField::Price => a.price().value().total_cmp(&b.price().value()),
            SortField::Category => a.category().cmp(b.category()),
        }
    }
}

impl core::fmt::Display for SortField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.heading())
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    /// Accepts column headings ("Item Name") as well as snake_case keys ("item_name").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "item name" | "item_name" | "name" => Ok(SortField::ItemName),
            "quantity" => Ok(SortField::Quantity),
            "price" => Ok(SortField::Price),
            "category" => Ok(SortField::Category),
            _ => Err(DomainError::validation(format!("unknown sort column: {s:?}"))),
        }
    }
}

/// Aggregates shown under the table.
///
/// `total_quantity` saturates at `u64::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_quantity: u64,
    pub total_value: f64,
}

impl Summary {
    pub fn as_tuple(self) -> (u64, f64) {
        (self.total_quantity, self.total_value)
    }
}

/// Owned, ordered collection of inventory records keyed by item name.
///
/// Insertion order is kept until [`TableStore::sort`] reorders the rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStore {
    records: Vec<InventoryRecord>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from an existing record set, rejecting duplicate names.
    pub fn from_records(records: impl IntoIterator<Item = InventoryRecord>) -> DomainResult<Self> {
        let mut table = Self::new();
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, item_name: &str) -> Option<&InventoryRecord> {
        self.position(item_name).map(|idx| &self.records[idx])
    }

    pub fn contains(&self, item_name: &str) -> bool {
        self.position(item_name).is_some()
    }

    fn position(&self, item_name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.id().as_str() == item_name)
    }

    pub fn insert(&mut self, record: InventoryRecord) -> DomainResult<()> {
        if self.contains(record.item_name().as_str()) {
            return Err(DomainError::duplicate_key(record.item_name().as_str()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove a record by name, returning it.
    pub fn delete(&mut self, item_name: &str) -> DomainResult<InventoryRecord> {
        let idx = self
            .position(item_name)
            .ok_or_else(|| DomainError::not_found(item_name))?;
        Ok(self.records.remove(idx))
    }

    /// Replace quantity, price and category of an existing record.
    pub fn update(&mut self, item_name: &str, changes: RecordChanges) -> DomainResult<&InventoryRecord> {
        let idx = self
            .position(item_name)
            .ok_or_else(|| DomainError::not_found(item_name))?;
        self.records[idx].apply(changes);
        Ok(&self.records[idx])
    }

    /// Records whose name contains `needle`, ignoring case, in table order.
    ///
    /// Only the empty needle matches every record; whitespace is matched literally.
    pub fn filter(&self, needle: &str) -> Vec<&InventoryRecord> {
        if needle.is_empty() {
            return self.records.iter().collect();
        }
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.item_name().as_str().to_lowercase().contains(&needle))
            .collect()
    }

    /// Stable ascending reorder of the whole table by `field`.
    pub fn sort(&mut self, field: SortField) {
        self.records.sort_by(|a, b| field.compare(a, b));
    }

    pub fn summary(&self) -> Summary {
        self.records.iter().fold(Summary::default(), |acc, record| Summary {
            total_quantity: acc.total_quantity.saturating_add(record.quantity()),
            total_value: acc.total_value + record.value(),
        })
    }

    /// Swap in a whole new record set. On error the current contents are kept.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = InventoryRecord>) -> DomainResult<()> {
        let replacement = Self::from_records(records)?;
        *self = replacement;
        Ok(())
    }

    /// Execute a typed mutation.
    pub fn execute(&mut self, command: InventoryCommand) -> DomainResult<()> {
        let command_type = command.command_type();
        let result = match command {
            InventoryCommand::Insert { record } => self.insert(record),
            InventoryCommand::Delete { item_name } => self.delete(item_name.as_str()).map(|_| ()),
            InventoryCommand::Update { item_name, changes } => {
                self.update(item_name.as_str(), changes).map(|_| ())
            }
        };

        match &result {
            Ok(()) => tracing::debug!(command_type, rows = self.len(), "inventory command applied"),
            Err(err) => tracing::debug!(command_type, error = %err, "inventory command rejected"),
        }
        result
    }
}
