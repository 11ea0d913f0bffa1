//! Export module for fintrack
//!
//! Provides ledger export in multiple formats:
//! - CSV: the ledger file format, importable again
//! - JSON: machine-readable snapshot including ids and metadata
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_ledger_csv;
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;
