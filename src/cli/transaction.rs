//! Transaction CLI commands
//!
//! The input form for adding and editing transactions, plus delete and list.
//! Field validation happens here, before anything reaches the service layer.

use chrono::{Local, NaiveDate};
use clap::Args;

use super::report::{resolve_range, RangeArgs};
use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money, TransactionId, TransactionInput, TransactionType};
use crate::reports::filter_view;
use crate::services::TransactionService;
use crate::storage::table::parse_date;
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, must be greater than zero (e.g. "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Description
    #[arg(short = 'D', long, default_value = "")]
    pub description: String,
    /// Category (Food, Housing, Leisure, Transport, Other)
    #[arg(short, long, default_value = "Other")]
    pub category: String,
    /// Transaction type (income or expense)
    #[arg(short = 't', long = "type", default_value = "expense")]
    pub kind: String,
}

/// Arguments for `edit`; omitted fields keep their current value
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Transaction ID (as shown by `list`)
    pub id: String,
    /// New amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// New description
    #[arg(short = 'D', long)]
    pub description: Option<String>,
    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
    /// New transaction type
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Transaction ID (as shown by `list`)
    pub id: String,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub range: RangeArgs,
    /// Show the whole ledger, including rows without a date
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub all: bool,
}

/// Handle `add`
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> FinanceResult<()> {
    let date = match args.date {
        Some(d) => parse_date_arg(&d)?,
        None => Local::now().date_naive(),
    };
    let input = TransactionInput::new(
        date,
        args.description.trim(),
        parse_category(&args.category)?,
        parse_amount(&args.amount)?,
        parse_kind(&args.kind)?,
    );

    let service = TransactionService::new(storage);
    let ledger = service.add(service.load()?, input)?;

    if let Some(txn) = ledger.transactions().last() {
        println!("Transaction added successfully!");
        print!("{}", format_transaction_details(txn, settings));
    }
    Ok(())
}

/// Handle `edit`
pub fn handle_edit_command(
    storage: &Storage,
    settings: &Settings,
    args: EditArgs,
) -> FinanceResult<()> {
    let id = parse_id(&args.id)?;
    let service = TransactionService::new(storage);
    let ledger = service.load()?;

    let position = ledger
        .position(id)
        .ok_or_else(|| FinanceError::transaction_not_found(args.id.clone()))?;
    let mut input = ledger.transactions()[position].to_input();

    if let Some(amount) = args.amount {
        input.amount = parse_amount(&amount)?;
    }
    if let Some(date) = args.date {
        input.date = Some(parse_date_arg(&date)?);
    }
    if let Some(description) = args.description {
        input.description = description.trim().to_string();
    }
    if let Some(category) = args.category {
        input.category = parse_category(&category)?;
    }
    if let Some(kind) = args.kind {
        input.kind = parse_kind(&kind)?;
    }

    // Ids follow content, so the edited row is found by position
    let ledger = service.edit(ledger, id, input)?;
    if let Some(txn) = ledger.transactions().get(position) {
        println!("Transaction updated successfully!");
        print!("{}", format_transaction_details(txn, settings));
    }
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command(storage: &Storage, args: DeleteArgs) -> FinanceResult<()> {
    let id = parse_id(&args.id)?;
    let service = TransactionService::new(storage);
    let ledger = service.delete(service.load()?, id)?;

    println!(
        "Deleted transaction #{} ({} remaining)",
        id,
        ledger.len()
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> FinanceResult<()> {
    let ledger = TransactionService::new(storage).load()?;

    if args.all {
        print!("{}", format_transaction_table(&ledger, settings));
        return Ok(());
    }

    let range = resolve_range(&args.range, Local::now().date_naive())?;
    let view = filter_view(&ledger, range);
    println!(
        "Transactions from {} to {}",
        range.start.format(&settings.date_format),
        range.end.format(&settings.date_format)
    );
    print!("{}", format_transaction_table(view, settings));
    Ok(())
}

/// Parse an amount from the form; it must be strictly positive
pub(crate) fn parse_amount(value: &str) -> FinanceResult<Money> {
    let amount = Money::parse(value).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid amount '{}': {}. Use a format like '12.50'",
            value, e
        ))
    })?;
    if !amount.is_positive() {
        return Err(FinanceError::Validation(format!(
            "Amount must be greater than zero, got '{}'",
            value
        )));
    }
    Ok(amount)
}

/// Parse a date argument (YYYY-MM-DD)
pub(crate) fn parse_date_arg(value: &str) -> FinanceResult<NaiveDate> {
    parse_date(value).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD format",
            value
        ))
    })
}

fn parse_category(value: &str) -> FinanceResult<Category> {
    value
        .parse()
        .map_err(|e| FinanceError::Validation(format!("{}", e)))
}

fn parse_kind(value: &str) -> FinanceResult<TransactionType> {
    value
        .parse()
        .map_err(|e| FinanceError::Validation(format!("{}", e)))
}

fn parse_id(value: &str) -> FinanceResult<TransactionId> {
    value.parse().map_err(|_| {
        FinanceError::Validation(format!(
            "Invalid transaction ID '{}'. Use the ID shown by 'fintrack list'",
            value
        ))
    })
}
