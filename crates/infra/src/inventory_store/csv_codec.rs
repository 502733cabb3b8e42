//! CSV encoding of the inventory table.
//!
//! Format: a header line `Item Name,Quantity,Price,Category` followed by one record per
//! line. Fields containing the delimiter or quotes are quoted on write, so free-text
//! categories survive a round trip.

use std::collections::HashSet;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use stockroom_inventory::{InventoryRecord, ItemName, Price};

use super::r#trait::PersistenceError;

/// Column headings, in file order.
pub const CSV_HEADER: [&str; 4] = ["Item Name", "Quantity", "Price", "Category"];

#[derive(Debug, Serialize)]
struct CsvRowOut<'a> {
    item_name: &'a str,
    quantity: u64,
    price: f64,
    category: &'a str,
}

#[derive(Debug, Deserialize)]
struct CsvRowIn {
    item_name: String,
    quantity: String,
    price: String,
    category: String,
}

/// Write the header and every record to `writer`.
pub fn write_records<W: Write>(writer: W, records: &[InventoryRecord]) -> Result<(), PersistenceError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // written explicitly so an empty table still gets a header line
    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(CsvRowOut {
            item_name: record.item_name().as_str(),
            quantity: record.quantity(),
            price: record.price().value(),
            category: record.category(),
        })?;
    }
    csv_writer
        .flush()
        .map_err(|err| PersistenceError::io("csv writer", err))?;
    Ok(())
}

/// Parse a full inventory file. Any bad row fails the whole read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<InventoryRecord>, PersistenceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers.get(0) == Some("")) {
        return Err(PersistenceError::malformed(1, "missing header line"));
    }
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(PersistenceError::malformed(
            1,
            format!(
                "expected header {:?}, found {:?}",
                CSV_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() != CSV_HEADER.len() {
            return Err(PersistenceError::malformed(
                line,
                format!("expected {} fields, found {}", CSV_HEADER.len(), row.len()),
            ));
        }

        let raw: CsvRowIn = row
            .deserialize(None)
            .map_err(|err| PersistenceError::malformed(line, err.to_string()))?;
        let record = parse_row(raw).map_err(|message| PersistenceError::malformed(line, message))?;

        if !seen.insert(record.item_name().clone()) {
            return Err(PersistenceError::malformed(
                line,
                format!("duplicate item name {:?}", record.item_name().as_str()),
            ));
        }
        records.push(record);
    }

    Ok(records)
}

fn parse_row(raw: CsvRowIn) -> Result<InventoryRecord, String> {
    let item_name = ItemName::parse(&raw.item_name).map_err(|e| e.to_string())?;
    let quantity = raw
        .quantity
        .parse::<u64>()
        .map_err(|_| format!("quantity must be a non-negative integer (got {:?})", raw.quantity))?;
    let price = Price::parse(&raw.price).map_err(|e| e.to_string())?;
    Ok(InventoryRecord::new(item_name, quantity, price, raw.category))
}
