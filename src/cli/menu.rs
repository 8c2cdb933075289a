//! Interactive menu
//!
//! The console loop: record a transaction, show the budget, analyze expenses
//! or exit. Reads from any `BufRead` and writes to any `Write` so the loop can
//! be driven from tests.

use std::io::{BufRead, Write};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Ledger, TransactionKind};
use crate::services::LedgerService;

/// Run the menu until the user exits or input ends
///
/// Invalid input is reported and the menu is shown again. Errors from saving
/// the ledger end the loop and are returned.
pub fn run_menu<R: BufRead, W: Write>(
    service: &LedgerService<'_>,
    ledger: &mut Ledger,
    precision: usize,
    input: &mut R,
    output: &mut W,
) -> BudgetResult<()> {
    loop {
        writeln!(output, "\nBudget Tracker")?;
        writeln!(output, "1. Record Transaction")?;
        writeln!(output, "2. Calculate Budget")?;
        writeln!(output, "3. Analyze Expenses")?;
        writeln!(output, "4. Exit")?;

        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                if !record_interactive(service, ledger, input, output)? {
                    return Ok(());
                }
            }
            "2" => {
                let summary = service.calculate_budget(ledger);
                write!(output, "{}", summary.format_terminal(precision))?;
            }
            "3" => {
                let analysis = service.analyze_expenses(ledger);
                write!(output, "{}", analysis.format_terminal(precision))?;
            }
            "4" => return Ok(()),
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}

/// Prompt for and record one transaction
///
/// Returns `Ok(false)` when input ended mid-prompt.
fn record_interactive<R: BufRead, W: Write>(
    service: &LedgerService<'_>,
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> BudgetResult<bool> {
    let Some(kind) = prompt(input, output, "Enter transaction type (income/expense): ")? else {
        return Ok(false);
    };
    // Reject the kind before asking for anything else
    if let Err(e) = kind.parse::<TransactionKind>() {
        writeln!(output, "{}", e)?;
        return Ok(true);
    }

    let Some(category) = prompt(input, output, "Enter transaction category: ")? else {
        return Ok(false);
    };
    let Some(amount) = prompt(input, output, "Enter transaction amount: ")? else {
        return Ok(false);
    };

    match service.record_transaction(ledger, &kind, &category, &amount) {
        Ok(recorded) => {
            writeln!(output, "Transaction recorded successfully.")?;
            if let Some(e) = recorded.audit_error {
                writeln!(output, "Warning: transaction saved but not audited: {}", e)?;
            }
        }
        Err(e) if e.is_validation() => writeln!(output, "{}", e)?,
        Err(e) => return Err(e),
    }

    Ok(true)
}

/// Print `message` and read one line without its line ending
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> BudgetResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| BudgetError::Io(format!("Failed to read input: {}", e)))?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths);
        (temp_dir, storage)
    }

    fn run(storage: &Storage, ledger: &mut Ledger, script: &str) -> String {
        let service = LedgerService::new(storage);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(&service, ledger, 2, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_record_and_report() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = Ledger::new();

        let output = run(
            &storage,
            &mut ledger,
            "1\nincome\nSalary\n1000\n\
             1\nexpense\nFood\n50\n\
             1\nExpense\nFood\n25\n\
             2\n3\n4\n",
        );

        assert_eq!(ledger.incomes.len(), 1);
        assert_eq!(ledger.expenses.len(), 2);
        assert!(output.contains("Transaction recorded successfully."));
        assert!(output.contains("Total Income: 1000.00"));
        assert!(output.contains("Total Expense: 75.00"));
        assert!(output.contains("Remaining Budget: 925.00"));
        assert!(output.contains("Expense Analysis:\nFood: 75.00\n"));
    }

    #[test]
    fn test_invalid_kind_skips_remaining_prompts() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = Ledger::new();

        let output = run(&storage, &mut ledger, "1\nsavings\n4\n");

        assert!(ledger.is_empty());
        assert!(output.contains("Invalid transaction type: 'savings'"));
        assert!(!output.contains("Enter transaction category"));
    }

    #[test]
    fn test_invalid_amount_reported() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = Ledger::new();

        let output = run(&storage, &mut ledger, "1\nexpense\nFood\nabc\n4\n");

        assert!(ledger.is_empty());
        assert!(output.contains("Invalid amount: 'abc'"));
        assert!(!storage.ledger.exists());
    }

    #[test]
    fn test_invalid_choice() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = Ledger::new();

        let output = run(&storage, &mut ledger, "9\n4\n");

        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("Budget Tracker").count(), 2);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = Ledger::new();

        run(&storage, &mut ledger, "1\nincome\n");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_audit_failure_keeps_menu_running() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir(paths.audit_log()).unwrap();
        let storage = Storage::new(paths);
        let mut ledger = Ledger::new();

        let output = run(&storage, &mut ledger, "1\nexpense\nFood\n10\n2\n4\n");

        assert!(output.contains("Transaction recorded successfully."));
        assert!(output.contains("Warning: transaction saved but not audited"));
        assert!(output.contains("Total Expense: 10.00"));
        assert_eq!(storage.ledger.load().unwrap(), ledger);
    }

    #[test]
    fn test_category_kept_verbatim() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = Ledger::new();

        run(&storage, &mut ledger, "1\nexpense\n  Eating Out \n12.5\n4\n");
        assert_eq!(ledger.expenses[0].category, "  Eating Out ");
    }
}
