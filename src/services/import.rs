//! CSV import service
//!
//! Reads an external table of the ledger's own shape and merges it into the
//! ledger. The header must carry exactly the canonical columns; a table with
//! extra or missing columns is rejected rather than partially imported.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Ledger, TransactionInput};
use crate::services::TransactionService;
use crate::storage::{read_table, Storage, TableError};

/// Result of a completed import
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Number of rows appended
    pub imported: usize,
    /// Rows that came in without a usable date
    pub undated: usize,
    /// The updated ledger
    pub ledger: Ledger,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse an external table from a reader
    pub fn parse_csv<R: Read>(&self, reader: R) -> FinanceResult<Vec<TransactionInput>> {
        read_table(reader).map_err(|e| match e {
            TableError::Schema(msg) => FinanceError::Import(format!("invalid columns: {}", msg)),
            other => FinanceError::Import(other.to_string()),
        })
    }

    /// Parse an external table from a file
    pub fn parse_file(&self, path: &Path) -> FinanceResult<Vec<TransactionInput>> {
        let file = File::open(path).map_err(|e| {
            FinanceError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.parse_csv(BufReader::new(file))
    }

    /// Parse `path` and merge all of its rows into `ledger`
    ///
    /// Nothing is written if the file fails to parse.
    pub fn import_file(&self, ledger: Ledger, path: &Path) -> FinanceResult<ImportResult> {
        let rows = self.parse_file(path)?;
        let imported = rows.len();
        let undated = rows.iter().filter(|r| r.date.is_none()).count();

        let ledger = TransactionService::new(self.storage).import_merge(ledger, rows)?;

        Ok(ImportResult {
            imported,
            undated,
            ledger,
        })
    }
}
