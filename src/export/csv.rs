//! CSV Export functionality
//!
//! Writes the ledger in the same table format as the ledger file, so an
//! export can be imported back or dropped in as a replacement ledger.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;
use crate::storage::write_table;

/// Export transactions to CSV
pub fn export_ledger_csv<'a, W, I>(writer: W, transactions: I) -> FinanceResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Transaction>,
{
    write_table(writer, transactions).map_err(|e| FinanceError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::config::settings::Settings;
    use crate::models::{Category, Ledger, Money, TransactionInput, TransactionType};
    use crate::services::TransactionService;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_matches_ledger_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        let service = TransactionService::new(&storage);

        let ledger = service
            .add(
                Ledger::new(),
                TransactionInput::new(
                    NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
                    "Pizza, large",
                    Category::Food,
                    Money::from_cents(3_250),
                    TransactionType::Expense,
                ),
            )
            .unwrap();

        let mut exported = Vec::new();
        export_ledger_csv(&mut exported, &ledger).unwrap();
        let on_disk = std::fs::read(storage.ledger.path()).unwrap();

        assert_eq!(exported, on_disk);
        let text = String::from_utf8(exported).unwrap();
        assert!(text.starts_with("date,description,category,amount,type\n"));
        assert!(text.contains("2024-04-02,\"Pizza, large\",Food,32.50,Expense"));
    }
}
