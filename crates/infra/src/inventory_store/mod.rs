//! Persistence boundary for the inventory table.
//!
//! The table is saved and loaded as a whole; there is no incremental write path.

pub mod csv_codec;
pub mod csv_file;
pub mod in_memory;
pub mod r#trait;

pub use csv_codec::{read_records, write_records, CSV_HEADER};
pub use csv_file::CsvFileRepository;
pub use in_memory::InMemoryRepository;
pub use r#trait::{InventoryRepository, PersistenceError};
