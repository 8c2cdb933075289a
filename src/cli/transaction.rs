//! Transaction CLI commands
//!
//! Records a single transaction without going through the menu.

use crate::error::BudgetResult;
use crate::models::Ledger;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Handle `budget add <kind> <category> <amount>`
pub fn handle_add_command(
    storage: &Storage,
    ledger: &mut Ledger,
    kind: &str,
    category: &str,
    amount: &str,
) -> BudgetResult<()> {
    let service = LedgerService::new(storage);
    let recorded = service.record_transaction(ledger, kind, category, amount)?;

    println!("Transaction recorded successfully.");
    println!("  {}", recorded.transaction);
    if let Some(e) = recorded.audit_error {
        eprintln!("Warning: transaction saved but not audited: {}", e);
    }
    Ok(())
}
