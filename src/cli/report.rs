//! CLI commands for reports
//!
//! Prints the budget summary and the per-category expense analysis, or
//! exports the analysis to CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Ledger;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Handle `budget budget`
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    ledger: &Ledger,
) -> BudgetResult<()> {
    let summary = LedgerService::new(storage).calculate_budget(ledger);
    print!("{}", summary.format_terminal(settings.display_precision));
    Ok(())
}

/// Handle `budget expenses [--output FILE]`
pub fn handle_expenses_command(
    storage: &Storage,
    settings: &Settings,
    ledger: &Ledger,
    output: Option<&Path>,
) -> BudgetResult<()> {
    let analysis = LedgerService::new(storage).analyze_expenses(ledger);

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            analysis.export_csv(&mut writer)?;
            writer.flush()?;
            println!(
                "Exported {} categories to {}",
                analysis.len(),
                path.display()
            );
        }
        None => print!("{}", analysis.format_terminal(settings.display_precision)),
    }

    Ok(())
}
