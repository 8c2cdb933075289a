//! Expense Analysis
//!
//! Per-category expense totals. Categories are matched exactly (case and
//! whitespace included) and reported in the order they first appear.

use std::io::Write;

use indexmap::IndexMap;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Ledger;

/// Expense totals keyed by category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseAnalysis {
    categories: IndexMap<String, f64>,
}

impl ExpenseAnalysis {
    /// Accumulate every expense into its category
    pub fn generate(ledger: &Ledger) -> Self {
        let mut categories: IndexMap<String, f64> = IndexMap::new();

        for expense in &ledger.expenses {
            *categories.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }

        Self { categories }
    }

    /// Total for a category, if it has any expenses
    pub fn get(&self, category: &str) -> Option<f64> {
        self.categories.get(category).copied()
    }

    /// Categories and totals in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the analysis for terminal display
    pub fn format_terminal(&self, precision: usize) -> String {
        let mut output = String::from("Expense Analysis:\n");
        for (category, amount) in self.iter() {
            output.push_str(&format!("{}: {:.*}\n", category, precision, amount));
        }
        output
    }

    /// Export the analysis to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BudgetResult<()> {
        writeln!(writer, "Category,Amount").map_err(|e| BudgetError::Io(e.to_string()))?;

        for (category, amount) in self.iter() {
            writeln!(writer, "{},{:.2}", csv_field(category), amount)
                .map_err(|e| BudgetError::Io(e.to_string()))?;
        }

        Ok(())
    }
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionKind};

    fn ledger_with_expenses(expenses: &[(&str, f64)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (category, amount) in expenses {
            ledger.push(TransactionKind::Expense, Transaction::new(*category, *amount));
        }
        ledger
    }

    #[test]
    fn test_first_occurrence_order() {
        let ledger = ledger_with_expenses(&[
            ("Rent", 800.0),
            ("Food", 50.0),
            ("Auto", 30.0),
            ("Food", 25.0),
        ]);

        let analysis = ExpenseAnalysis::generate(&ledger);
        let categories: Vec<_> = analysis.iter().collect();
        assert_eq!(
            categories,
            vec![("Rent", 800.0), ("Food", 75.0), ("Auto", 30.0)]
        );
    }

    #[test]
    fn test_categories_are_case_sensitive() {
        let ledger = ledger_with_expenses(&[("food", 1.0), ("Food", 2.0), ("Food ", 4.0)]);

        let analysis = ExpenseAnalysis::generate(&ledger);
        assert_eq!(analysis.len(), 3);
        assert_eq!(analysis.get("Food"), Some(2.0));
        assert_eq!(analysis.get("food"), Some(1.0));
    }

    #[test]
    fn test_incomes_not_included() {
        let mut ledger = ledger_with_expenses(&[("Food", 10.0)]);
        ledger.push(TransactionKind::Income, Transaction::new("Salary", 1000.0));

        let analysis = ExpenseAnalysis::generate(&ledger);
        assert_eq!(analysis.len(), 1);
        assert_eq!(analysis.get("Salary"), None);
    }

    #[test]
    fn test_empty_ledger() {
        let analysis = ExpenseAnalysis::generate(&Ledger::new());
        assert!(analysis.is_empty());
        assert_eq!(analysis.format_terminal(2), "Expense Analysis:\n");
    }

    #[test]
    fn test_format_terminal() {
        let ledger = ledger_with_expenses(&[("Food", 50.0), ("Rent", 800.0), ("Food", 25.0)]);

        assert_eq!(
            ExpenseAnalysis::generate(&ledger).format_terminal(2),
            "Expense Analysis:\nFood: 75.00\nRent: 800.00\n"
        );
    }

    #[test]
    fn test_export_csv() {
        let ledger = ledger_with_expenses(&[("Food", 75.0), ("Gas, Oil", 20.5), ("\"Misc\"", 1.0)]);

        let mut output = Vec::new();
        ExpenseAnalysis::generate(&ledger)
            .export_csv(&mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Category,Amount\nFood,75.00\n\"Gas, Oil\",20.50\n\"\"\"Misc\"\"\",1.00\n"
        );
    }
}
