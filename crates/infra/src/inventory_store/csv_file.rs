use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use stockroom_inventory::InventoryRecord;

use super::csv_codec::{read_records, write_records};
use super::r#trait::{InventoryRepository, PersistenceError};

/// Inventory table stored as a single CSV file.
///
/// Saves go to a sibling temp file first and are renamed into place, so a failed save
/// leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct CsvFileRepository {
    path: PathBuf,
}

impl CsvFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "inventory.csv".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl InventoryRepository for CsvFileRepository {
    fn save(&self, records: &[InventoryRecord]) -> Result<(), PersistenceError> {
        let location = self.location();
        let tmp = self.temp_path();

        let file = File::create(&tmp).map_err(|err| PersistenceError::io(&location, err))?;
        let mut writer = BufWriter::new(file);
        let written = write_records(&mut writer, records).and_then(|()| {
            writer
                .flush()
                .map_err(|err| PersistenceError::io(&location, err))
        });
        drop(writer);

        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        fs::rename(&tmp, &self.path).map_err(|err| {
            let _ = fs::remove_file(&tmp);
            PersistenceError::io(&location, err)
        })?;

        tracing::info!(path = %location, rows = records.len(), "inventory saved");
        Ok(())
    }

    fn load(&self) -> Result<Vec<InventoryRecord>, PersistenceError> {
        let location = self.location();
        let file = File::open(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => PersistenceError::NotFound(location.clone()),
            _ => PersistenceError::io(&location, err),
        })?;

        let records = read_records(BufReader::new(file))?;
        tracing::info!(path = %location, rows = records.len(), "inventory loaded");
        Ok(records)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::{ItemName, Price};

    fn record(name: &str, quantity: u64, price: f64, category: &str) -> InventoryRecord {
        InventoryRecord::new(
            ItemName::parse(name).unwrap(),
            quantity,
            Price::new(price).unwrap(),
            category,
        )
    }

    #[test]
    fn save_then_load_reproduces_records() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvFileRepository::new(dir.path().join("inventory.csv"));
        let records = vec![
            record("Widget", 10, 2.5, "Hardware"),
            record("Gadget", 5, 9.99, "Hardware"),
            record("Glue", 0, 0.0, "Craft, adhesives"),
        ];

        repo.save(&records).unwrap();
        assert_eq!(repo.load().unwrap(), records);
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn saved_file_starts_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvFileRepository::new(dir.path().join("inventory.csv"));
        repo.save(&[]).unwrap();

        let text = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(text, "Item Name,Quantity,Price,Category\n");
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvFileRepository::new(dir.path().join("inventory.csv"));
        repo.save(&[record("Old", 1, 1.0, "x")]).unwrap();
        repo.save(&[record("New", 2, 2.0, "y")]).unwrap();

        assert_eq!(repo.load().unwrap(), vec![record("New", 2, 2.0, "y")]);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvFileRepository::new(dir.path().join("absent.csv"));
        match repo.load() {
            Err(PersistenceError::NotFound(location)) => assert!(location.ends_with("absent.csv")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvFileRepository::new(dir.path().join("no-such-dir").join("inventory.csv"));
        assert!(matches!(
            repo.save(&[record("A", 1, 1.0, "x")]),
            Err(PersistenceError::Io { .. })
        ));
    }
}
