//! Storage layer for fintrack
//!
//! Provides CSV file storage for the ledger with atomic writes, load
//! memoization, and automatic directory creation.

pub mod file_io;
pub mod ledger;
pub mod table;

pub use file_io::write_atomic;
pub use ledger::LedgerStore;
pub use table::{read_table, write_table, TableError, COLUMNS};

use crate::config::paths::FinancePaths;
use crate::config::settings::Settings;
use crate::error::FinanceError;

/// Main storage coordinator
pub struct Storage {
    paths: FinancePaths,
    pub ledger: LedgerStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinancePaths, settings: &Settings) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerStore::new(paths.ledger_file(&settings.ledger_file_name)),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Check if storage has been initialized (settings were written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            storage.ledger.path(),
            temp_dir.path().join("data").join("transactions.csv")
        );
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_custom_ledger_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            ledger_file_name: "household.csv".into(),
            ..Settings::default()
        };
        let storage = Storage::new(paths, &settings).unwrap();

        assert!(storage.ledger.path().ends_with("household.csv"));
    }
}
