//! fintrack - Personal finance tracker backed by a CSV ledger
//!
//! This library provides the core functionality for the fintrack CLI. It
//! keeps a ledger of income and expense transactions in a single CSV file
//! and computes summaries over date-range views of it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, ids)
//! - `storage`: CSV ledger storage with atomic writes and load caching
//! - `services`: Ledger mutations and CSV import
//! - `reports`: Date-range views and aggregates
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{FinancePaths, Settings};
//! use fintrack::reports::{totals, filter_view, DateRange};
//! use fintrack::storage::Storage;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//!
//! let ledger = storage.ledger.load()?;
//! let summary = totals(filter_view(&ledger, DateRange::all()));
//! println!("Balance: {}", summary.balance);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
