use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_add_command, handle_delete_command, handle_edit_command, handle_export_command,
    handle_import_command, handle_list_command, handle_report_command, handle_summary_command,
    AddArgs, DeleteArgs, EditArgs, ExportArgs, ImportArgs, ListArgs, RangeArgs, ReportCommands,
};
use fintrack::config::{FinancePaths, Settings};
use fintrack::logging::init_tracing;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker backed by a CSV ledger",
    long_about = "fintrack records income and expense transactions in a single CSV \
                  file and summarizes them by period, category and month from the \
                  command line."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new transaction
    Add(AddArgs),

    /// Edit an existing transaction
    Edit(EditArgs),

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List transactions in a date range
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show balance, income, expenses and charts for a date range
    #[command(alias = "dashboard")]
    Summary(RangeArgs),

    /// Individual reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the ledger
    Export(ExportArgs),

    /// Merge transactions from a CSV file into the ledger
    Import(ImportArgs),

    /// Initialize the data directory, settings and an empty ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::Edit(args)) => handle_edit_command(&storage, &settings, args)?,
        Some(Commands::Delete(args)) => handle_delete_command(&storage, args)?,
        Some(Commands::List(args)) => handle_list_command(&storage, &settings, args)?,
        Some(Commands::Summary(range)) => handle_summary_command(&storage, &settings, range)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::Import(args)) => handle_import_command(&storage, args)?,
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let ledger = storage.ledger.load()?;
            println!("Initialization complete!");
            println!();
            println!("Ledger file: {}", storage.ledger.path().display());
            println!("Transactions: {}", ledger.len());
            println!();
            println!("Run 'fintrack add <amount>' to record your first transaction.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Ledger file:     {}", storage.ledger.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Export file:     {}", settings.export_file_name);
            println!("  Initialized:     {}", storage.is_initialized());
        }
        None => {
            println!("fintrack - Personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack summary' to see this month's dashboard.");
        }
    }

    Ok(())
}
