//! CSV table format of the ledger
//!
//! The ledger file, exports, and import files all share one shape: a header
//! row `date,description,category,amount,type` followed by one row per
//! transaction.

use std::collections::HashSet;
use std::fmt;
use std::io::{Read, Write};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Money, Transaction, TransactionInput, TransactionType};

/// Canonical column set, in the order they are written
pub const COLUMNS: [&str; 5] = ["date", "description", "category", "amount", "type"];

/// Date formats accepted when reading; the first one is used for writing
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Why a table could not be read
#[derive(Debug)]
pub enum TableError {
    /// Header does not match the canonical column set
    Schema(String),
    /// A data row could not be parsed (1-based row number, header excluded)
    Row { row: usize, message: String },
    /// The underlying CSV reader/writer failed
    Csv(csv::Error),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(msg) => write!(f, "{}", msg),
            Self::Row { row, message } => write!(f, "row {}: {}", row, message),
            Self::Csv(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TableError {}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    #[serde(default)]
    description: String,
    category: String,
    amount: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize)]
struct OutRow<'a> {
    date: String,
    description: &'a str,
    category: &'static str,
    amount: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Parse a date cell; empty or unrecognized values yield `None`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Format a date cell as written to the file
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMATS[0]).to_string())
        .unwrap_or_default()
}

/// Check that `headers` is exactly the canonical column set
pub fn check_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Result<(), TableError> {
    let mut seen = HashSet::new();
    let mut unexpected = Vec::new();

    for header in headers {
        let header = header.trim();
        if !COLUMNS.contains(&header) {
            unexpected.push(header.to_string());
        } else if !seen.insert(header) {
            return Err(TableError::Schema(format!("duplicate column '{}'", header)));
        }
    }

    if !unexpected.is_empty() {
        return Err(TableError::Schema(format!(
            "unexpected column(s): {}",
            unexpected.join(", ")
        )));
    }

    let missing: Vec<_> = COLUMNS.iter().filter(|c| !seen.contains(*c)).collect();
    if !missing.is_empty() {
        let names: Vec<_> = missing.iter().map(|c| c.to_string()).collect();
        return Err(TableError::Schema(format!(
            "missing column(s): {}",
            names.join(", ")
        )));
    }

    Ok(())
}

/// Read every row of a table
///
/// Columns may appear in any order as long as the set is exact. Unparseable
/// dates become `None`; anything else malformed fails the whole read.
pub fn read_table<R: Read>(reader: R) -> Result<Vec<TransactionInput>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_headers(headers.iter())?;

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = idx + 1;
        let raw = result.map_err(|e| TableError::Row {
            row,
            message: e.to_string(),
        })?;
        rows.push(parse_row(raw, row)?);
    }

    Ok(rows)
}

fn parse_row(raw: RawRow, row: usize) -> Result<TransactionInput, TableError> {
    let row_error = |message: String| TableError::Row { row, message };

    let date = parse_date(&raw.date);
    if date.is_none() && !raw.date.trim().is_empty() {
        tracing::warn!(row, value = %raw.date, "unparseable date, treating as missing");
    }

    let category: Category = raw.category.parse().map_err(|e| row_error(format!("{}", e)))?;
    let kind: TransactionType = raw.kind.parse().map_err(|e| row_error(format!("{}", e)))?;
    let amount = Money::parse(&raw.amount).map_err(|e| row_error(e.to_string()))?;

    Ok(TransactionInput {
        date,
        description: raw.description,
        category,
        amount,
        kind,
    })
}

/// Write a header and one row per transaction
pub fn write_table<'a, W, I>(writer: W, transactions: I) -> Result<(), TableError>
where
    W: Write,
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for txn in transactions {
        csv_writer.serialize(OutRow {
            date: format_date(txn.date),
            description: &txn.description,
            category: txn.category.name(),
            amount: txn.amount.to_string(),
            kind: txn.kind.name(),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| TableError::Csv(csv::Error::from(e)))?;
    Ok(())
}
