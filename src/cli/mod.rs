//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod import;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use import::{handle_import_command, ImportArgs};
pub use report::{handle_report_command, handle_summary_command, RangeArgs, ReportCommands};
pub use transaction::{
    handle_add_command, handle_delete_command, handle_edit_command, handle_list_command, AddArgs,
    DeleteArgs, EditArgs, ListArgs,
};
