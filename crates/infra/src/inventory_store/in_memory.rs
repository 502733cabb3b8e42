use std::sync::RwLock;

use stockroom_inventory::InventoryRecord;

use super::csv_codec::{read_records, write_records};
use super::r#trait::{InventoryRepository, PersistenceError};

/// In-memory inventory store.
///
/// Keeps the encoded CSV bytes, so it exercises the same codec as the file store.
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    contents: RwLock<Option<Vec<u8>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw file contents.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
        }
    }

    /// Current encoded contents, if anything was saved.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.read().ok().and_then(|guard| guard.clone())
    }
}

impl InventoryRepository for InMemoryRepository {
    fn save(&self, records: &[InventoryRecord]) -> Result<(), PersistenceError> {
        let mut buf = Vec::new();
        write_records(&mut buf, records)?;

        let mut contents = self
            .contents
            .write()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".to_string()))?;
        *contents = Some(buf);
        Ok(())
    }

    fn load(&self) -> Result<Vec<InventoryRecord>, PersistenceError> {
        let contents = self
            .contents
            .read()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".to_string()))?;
        match contents.as_deref() {
            Some(bytes) => read_records(bytes),
            None => Err(PersistenceError::NotFound(self.location())),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
