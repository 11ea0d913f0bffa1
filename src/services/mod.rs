//! Service layer for fintrack
//!
//! The service layer provides the ledger mutations on top of the storage
//! layer: every operation takes a ledger snapshot, mutates it, persists it,
//! and returns it.

pub mod import;
pub mod transaction;

pub use import::{ImportResult, ImportService};
pub use transaction::TransactionService;
