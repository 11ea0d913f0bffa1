//! Core data models for fintrack
//!
//! This module contains the data structures that represent the ledger:
//! transactions, their categories and types, amounts, and ids.

pub mod category;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use category::{Category, TransactionType, UnknownValue};
pub use ids::TransactionId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionInput};
