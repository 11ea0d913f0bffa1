//! Report CLI commands
//!
//! The summary dashboard and the individual category/monthly reports, all
//! computed over a date-range view of the ledger.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::transaction::parse_date_arg;
use crate::config::Settings;
use crate::display::report::{
    format_category_breakdown, format_dashboard, format_monthly_comparison, format_totals,
    separator,
};
use crate::error::FinanceResult;
use crate::reports::{by_category, by_month, filter_view, totals, DashboardReport, DateRange};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Date range arguments shared by the viewing commands
#[derive(Args, Debug, Default)]
pub struct RangeArgs {
    /// Start date (YYYY-MM-DD), defaults to the first of the current month
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<String>,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Expense breakdown by category
    Category {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Income vs. expenses per month
    Monthly {
        #[command(flatten)]
        range: RangeArgs,
    },
}

/// Resolve `--from`/`--to` against the month-to-date default
pub fn resolve_range(args: &RangeArgs, today: NaiveDate) -> FinanceResult<DateRange> {
    let default = DateRange::month_to_date(today);
    let start = match &args.from {
        Some(s) => parse_date_arg(s)?,
        None => default.start,
    };
    let end = match &args.to {
        Some(s) => parse_date_arg(s)?,
        None => default.end,
    };
    DateRange::new(start, end)
}

/// Handle `summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    range: RangeArgs,
) -> FinanceResult<()> {
    let ledger = TransactionService::new(storage).load()?;
    let range = resolve_range(&range, chrono::Local::now().date_naive())?;

    let report = DashboardReport::generate(&ledger, range);
    print!("{}", format_dashboard(&report, settings));
    Ok(())
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let ledger = TransactionService::new(storage).load()?;
    let today = chrono::Local::now().date_naive();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Category { range } => {
            let range = resolve_range(&range, today)?;
            let view = filter_view(&ledger, range);
            print_heading("Expenses by Category", range, settings);
            print!("{}", format_category_breakdown(&by_category(view), symbol));
        }
        ReportCommands::Monthly { range } => {
            let range = resolve_range(&range, today)?;
            let view = filter_view(&ledger, range);
            print_heading("Income vs. Expenses by Month", range, settings);
            print!("{}", format_monthly_comparison(&by_month(view.iter().copied()), symbol));
            println!("{}", separator(64));
            print!("{}", format_totals(&totals(view), symbol));
        }
    }

    Ok(())
}

fn print_heading(title: &str, range: DateRange, settings: &Settings) {
    println!(
        "{} ({} to {})",
        title,
        range.start.format(&settings.date_format),
        range.end.format(&settings.date_format)
    );
    println!("{}", separator(64));
}
