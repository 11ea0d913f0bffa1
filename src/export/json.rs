//! JSON Export functionality
//!
//! Exports the ledger to JSON with schema versioning. Unlike the CSV
//! export, the document carries transaction ids.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Ledger, Transaction};
use crate::reports::{totals, Totals};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    /// Rows without a usable date
    pub undated_count: usize,

    pub earliest_transaction: Option<NaiveDate>,

    pub latest_transaction: Option<NaiveDate>,

    /// Income total over every row, in cents
    pub income_cents: i64,

    /// Expense total over every row, in cents
    pub expense_cents: i64,
}

impl LedgerExport {
    /// Snapshot a ledger for export
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let dates = ledger.iter().filter_map(|t| t.date);
        let earliest_transaction = dates.clone().min();
        let latest_transaction = dates.max();
        let Totals {
            income, expense, ..
        } = totals(ledger);

        let metadata = ExportMetadata {
            transaction_count: ledger.len(),
            undated_count: ledger.iter().filter(|t| t.date.is_none()).count(),
            earliest_transaction,
            latest_transaction,
            income_cents: income.cents(),
            expense_cents: expense.cents(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: ledger.transactions().to_vec(),
            metadata,
        }
    }
}

/// Export the ledger to JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, writer: W, pretty: bool) -> FinanceResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionInput, TransactionType};

    fn ledger() -> Ledger {
        Ledger::from_inputs(vec![
            TransactionInput::new(
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                "Salary",
                Category::Other,
                Money::from_cents(200_000),
                TransactionType::Income,
            ),
            TransactionInput {
                date: None,
                description: "Mystery".into(),
                category: Category::Leisure,
                amount: Money::from_cents(1_000),
                kind: TransactionType::Expense,
            },
        ])
    }

    #[test]
    fn test_metadata() {
        let export = LedgerExport::from_ledger(&ledger());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.undated_count, 1);
        assert_eq!(
            export.metadata.earliest_transaction,
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(export.metadata.income_cents, 200_000);
        assert_eq!(export.metadata.expense_cents, 1_000);
    }

    #[test]
    fn test_export_json_parses_back() {
        let mut out = Vec::new();
        export_ledger_json(&ledger(), &mut out, true).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.transactions, ledger().transactions());
    }
}
