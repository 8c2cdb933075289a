use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_add_command, handle_budget_command, handle_expenses_command, handle_history_command,
    run_menu,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::models::Ledger;
use budget_tracker::services::LedgerService;
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Console budget tracker for income and expenses",
    long_about = "Records income and expense transactions in a JSON ledger and \
                  reports the remaining budget and spending per category. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Ledger file to use instead of the default location
    #[arg(short, long, global = true, env = "BUDGET_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    /// Record a transaction
    #[command(alias = "record")]
    Add {
        /// Transaction type (income or expense)
        kind: String,
        /// Category name
        category: String,
        /// Amount (e.g., "50" or "-12.75")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show total income, total expense and remaining budget
    Budget,

    /// Show expenses per category
    Expenses {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recently recorded transactions from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths, optionally updating settings
    Config {
        /// Enable or disable the audit log
        #[arg(long)]
        audit: Option<bool>,
        /// Decimal places used when printing amounts
        #[arg(long)]
        precision: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = BudgetPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_ledger_file(file);
    }
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone());
    if !settings.audit_enabled {
        storage = storage.without_audit();
    }

    match cli.command {
        None | Some(Commands::Menu) => {
            let mut ledger = load_ledger(&storage)?;
            let service = LedgerService::new(&storage);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            run_menu(
                &service,
                &mut ledger,
                settings.display_precision,
                &mut input,
                &mut output,
            )?;
        }
        Some(Commands::Add {
            kind,
            category,
            amount,
        }) => {
            let mut ledger = load_ledger(&storage)?;
            handle_add_command(&storage, &mut ledger, &kind, &category, &amount)?;
        }
        Some(Commands::Budget) => {
            let ledger = load_ledger(&storage)?;
            handle_budget_command(&storage, &settings, &ledger)?;
        }
        Some(Commands::Expenses { output }) => {
            let ledger = load_ledger(&storage)?;
            handle_expenses_command(&storage, &settings, &ledger, output.as_deref())?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Config { audit, precision }) => {
            if audit.is_some() || precision.is_some() {
                if let Some(audit) = audit {
                    settings.audit_enabled = audit;
                }
                if let Some(precision) = precision {
                    settings.display_precision = precision;
                }
                let settings_file = paths.settings_file();
                settings
                    .save(&paths)
                    .with_context(|| format!("Failed to save {}", settings_file.display()))?;
                println!("Settings saved.");
                println!();
            }

            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled:     {}", settings.audit_enabled);
            println!("  Display precision: {}", settings.display_precision);
        }
    }

    Ok(())
}

fn load_ledger(storage: &Storage) -> Result<Ledger> {
    storage
        .ledger
        .load()
        .with_context(|| format!("Failed to load {}", storage.ledger.path().display()))
}
