use anyhow::Result;
use clap::{Parser, Subcommand};

use spendtrack::cli::{
    handle_add, handle_budget_command, handle_delete, handle_list, handle_scan_command,
    handle_summary_command, AddArgs, BudgetCommands, DeleteArgs, ListArgs, ScanArgs,
};
use spendtrack::config::{paths::SpendPaths, settings::Settings};
use spendtrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendtrack",
    version,
    about = "Command-line personal finance tracker with AI receipt scanning",
    long_about = "spendtrack records income and expense transactions, shows \
                  aggregate statistics and per-category breakdowns, tracks \
                  monthly budgets, and can pre-fill a new transaction from a \
                  receipt photo via the Gemini API."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a transaction
    Add(AddArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete a transaction by id
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show totals and the expense breakdown by category
    Summary,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Pre-fill a transaction from a receipt photo
    Scan(ScanArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add(&storage, &settings, args)?;
        }
        Some(Commands::List(args)) => {
            handle_list(&storage, args)?;
        }
        Some(Commands::Delete(args)) => {
            handle_delete(&storage, args)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Scan(args)) => {
            handle_scan_command(&storage, &settings, args)?;
        }
        Some(Commands::Config) => {
            println!("spendtrack Configuration");
            println!("========================");
            println!("Config file:    {}", paths.settings_file().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            println!("  Gemini model:     {}", settings.gemini_model);
        }
        None => {
            println!("spendtrack - personal finance tracking from the command line");
            println!();
            println!("Run 'spendtrack --help' for usage information.");
            println!("Run 'spendtrack summary' to see where your money goes.");
        }
    }

    Ok(())
}
