//! Configuration loading and representation.

use std::path::PathBuf;

/// File the inventory is saved to, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "inventory.csv";

/// Application configuration.
///
/// There is no external configuration surface: the CSV path is fixed to
/// [`DEFAULT_CSV_PATH`] and only code (tests, embedders) can point it elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Target of the Save / Load commands.
    pub csv_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

impl AppConfig {
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_inventory_csv_in_working_dir() {
        assert_eq!(AppConfig::default().csv_path, PathBuf::from("inventory.csv"));
    }

    #[test]
    fn csv_path_can_be_redirected_in_code() {
        let config = AppConfig::default().with_csv_path("/tmp/stock.csv");
        assert_eq!(config.csv_path, PathBuf::from("/tmp/stock.csv"));
    }
}
