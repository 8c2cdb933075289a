//! Audit history CLI command

use crate::error::BudgetResult;
use crate::storage::Storage;

/// Handle `budget history [--limit N]`
pub fn handle_history_command(storage: &Storage, limit: usize) -> BudgetResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No transactions recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }
    Ok(())
}
