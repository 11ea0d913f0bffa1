//! CLI command for ledger export

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_ledger_csv, export_ledger_json, export_ledger_yaml};
use crate::models::Ledger;
use crate::services::TransactionService;
use crate::storage::{write_atomic, Storage};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV in the ledger's own format, importable again
    Csv,
    /// JSON snapshot with ids and metadata
    Json,
    /// YAML snapshot, human-readable
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path, defaults to the configured export file name
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `export`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> FinanceResult<()> {
    let ledger = TransactionService::new(storage).load()?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.export_file_name));

    write_export(&ledger, &output, args.format, args.pretty)?;

    println!(
        "Exported {} transactions to: {}",
        ledger.len(),
        output.display()
    );
    Ok(())
}

/// Write `ledger` to `output`; a failed export leaves any existing file as it was
fn write_export(
    ledger: &Ledger,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> FinanceResult<()> {
    write_atomic(output, |writer| match format {
        ExportFormat::Csv => export_ledger_csv(&mut *writer, ledger),
        ExportFormat::Json => export_ledger_json(ledger, &mut *writer, pretty),
        ExportFormat::Yaml => export_ledger_yaml(ledger, &mut *writer),
    })
    .map_err(|e| match e {
        FinanceError::Storage(msg) => {
            FinanceError::Export(format!("Failed to write {}: {}", output.display(), msg))
        }
        other => other,
    })
}
