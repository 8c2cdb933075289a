//! Budget Summary
//!
//! Total income, total expense and the remaining budget across the whole
//! ledger.

use crate::models::{Ledger, TransactionKind};

/// Aggregate totals for a ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    /// Sum of all income amounts
    pub total_income: f64,
    /// Sum of all expense amounts
    pub total_expense: f64,
    /// `total_income - total_expense`
    pub remaining: f64,
}

impl BudgetSummary {
    /// Compute totals for `ledger`; an empty ledger yields all zeros
    pub fn generate(ledger: &Ledger) -> Self {
        // Fold from +0.0 so an empty side prints as 0.00, not -0.00
        let total = |kind| {
            ledger
                .transactions(kind)
                .iter()
                .fold(0.0, |acc, t| acc + t.amount)
        };
        let total_income = total(TransactionKind::Income);
        let total_expense = total(TransactionKind::Expense);

        Self {
            total_income,
            total_expense,
            remaining: total_income - total_expense,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, precision: usize) -> String {
        let mut output = String::new();
        output.push_str(&format!("Total Income: {:.*}\n", precision, self.total_income));
        output.push_str(&format!("Total Expense: {:.*}\n", precision, self.total_expense));
        output.push_str(&format!("Remaining Budget: {:.*}\n", precision, self.remaining));
        output
    }
}
