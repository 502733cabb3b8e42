//! Infrastructure layer: file persistence and configuration.

pub mod config;
pub mod inventory_store;

pub use config::AppConfig;
pub use inventory_store::{
    CsvFileRepository, InMemoryRepository, InventoryRepository, PersistenceError,
};
