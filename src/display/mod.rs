//! Display formatting for terminal output

pub mod report;
pub mod transaction;

pub use report::format_dashboard;
pub use transaction::{format_transaction_details, format_transaction_table};
