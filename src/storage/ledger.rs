//! Ledger repository for CSV storage
//!
//! Loads and saves the full ledger to a single CSV file. Every save rewrites
//! the whole file; loads are memoized until the file changes on disk or a
//! save goes through this store.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::FinanceError;
use crate::models::Ledger;

use super::file_io::{file_stamp, write_atomic, FileStamp};
use super::table::{read_table, write_table, TableError};

/// Memoized ledger together with the file stamp it corresponds to
#[derive(Debug)]
struct CachedLedger {
    stamp: FileStamp,
    ledger: Ledger,
}

#[derive(Debug, Default)]
struct CacheState {
    /// Bumped on every successful save
    generation: u64,
    entry: Option<CachedLedger>,
}

/// Repository for ledger persistence
///
/// Not safe for concurrent writers across processes: the last save wins.
pub struct LedgerStore {
    path: PathBuf,
    cache: RwLock<CacheState>,
}

impl LedgerStore {
    /// Create a new ledger store for the CSV at `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: RwLock::new(CacheState::default()),
        }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger
    ///
    /// A missing file is created with the header row only and yields an
    /// empty ledger. Rows with unparseable dates load with no date.
    pub fn load(&self) -> Result<Ledger, FinanceError> {
        let Some(stamp) = file_stamp(&self.path)? else {
            info!(path = %self.path.display(), "ledger file missing, creating it");
            let ledger = Ledger::new();
            self.save(&ledger)?;
            return Ok(ledger);
        };

        {
            let cache = self.cache.read().map_err(|e| {
                FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
            })?;
            if let Some(entry) = cache.entry.as_ref().filter(|c| c.stamp == stamp) {
                debug!(rows = entry.ledger.len(), "ledger cache hit");
                return Ok(entry.ledger.clone());
            }
        }

        let file = File::open(&self.path).map_err(|e| {
            FinanceError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        let rows = read_table(BufReader::new(file)).map_err(|e| self.table_error(e))?;
        let ledger = Ledger::from_inputs(rows);
        debug!(rows = ledger.len(), path = %self.path.display(), "ledger loaded");

        let mut cache = self.cache.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        cache.entry = Some(CachedLedger {
            stamp,
            ledger: ledger.clone(),
        });

        Ok(ledger)
    }

    /// Overwrite the file with the full ledger
    pub fn save(&self, ledger: &Ledger) -> Result<(), FinanceError> {
        write_atomic(&self.path, |writer| {
            write_table(writer, ledger).map_err(|e| {
                FinanceError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })
        })?;

        let stamp = file_stamp(&self.path)?;
        let mut cache = self.cache.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        cache.generation += 1;
        cache.entry = stamp.map(|stamp| CachedLedger {
            stamp,
            ledger: ledger.clone(),
        });
        debug!(rows = ledger.len(), generation = cache.generation, "ledger saved");

        Ok(())
    }

    fn table_error(&self, err: TableError) -> FinanceError {
        match err {
            TableError::Schema(msg) => {
                FinanceError::Schema(format!("{}: {}", self.path.display(), msg))
            }
            other => FinanceError::Storage(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                other
            )),
        }
    }
}
