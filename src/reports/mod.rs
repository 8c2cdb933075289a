//! Reports module for the budget tracker
//!
//! Aggregates derived from the ledger. Nothing here is stored; every report
//! is recomputed from the current snapshot.

pub mod budget_summary;
pub mod expense_analysis;

pub use budget_summary::BudgetSummary;
pub use expense_analysis::ExpenseAnalysis;
