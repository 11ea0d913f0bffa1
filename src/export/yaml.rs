//! YAML Export functionality
//!
//! Exports the ledger to YAML for a human-readable snapshot.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::LedgerExport;
use crate::models::Ledger;

/// Export the ledger to YAML format
pub fn export_ledger_yaml<W: Write>(ledger: &Ledger, mut writer: W) -> FinanceResult<()> {
    let export = LedgerExport::from_ledger(ledger);
    let err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# fintrack ledger export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))
}
