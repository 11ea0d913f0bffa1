//! CLI command for CSV import

use std::path::PathBuf;

use clap::Args;

use crate::error::FinanceResult;
use crate::services::{ImportService, TransactionService};
use crate::storage::Storage;

/// Arguments for `import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file with columns date, description, category, amount, type
    pub file: PathBuf,
}

/// Handle `import`
pub fn handle_import_command(storage: &Storage, args: ImportArgs) -> FinanceResult<()> {
    let ledger = TransactionService::new(storage).load()?;
    let result = ImportService::new(storage).import_file(ledger, &args.file)?;

    println!(
        "Imported {} transactions from {}",
        result.imported,
        args.file.display()
    );
    if result.undated > 0 {
        println!(
            "Warning: {} rows have no usable date and will not appear in date-filtered views",
            result.undated
        );
    }
    println!("Ledger now holds {} transactions.", result.ledger.len());
    Ok(())
}
