//! Ledger service
//!
//! Validates user-supplied transactions, appends them to the in-memory
//! ledger, persists the snapshot and computes the aggregates shown to the
//! user.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Ledger, Transaction, TransactionKind};
use crate::reports::{BudgetSummary, ExpenseAnalysis};
use crate::storage::Storage;

/// A transaction that has been appended and saved
#[derive(Debug)]
pub struct Recorded {
    pub transaction: Transaction,
    /// Set when the ledger was saved but the audit entry could not be written
    pub audit_error: Option<BudgetError>,
}

/// Service for recording transactions and reading aggregates
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the persisted ledger
    pub fn load(&self) -> BudgetResult<Ledger> {
        self.storage.ledger.load()
    }

    /// Record a transaction from raw user input
    ///
    /// The kind and amount are validated before anything is touched; a
    /// rejected transaction leaves `ledger` unchanged. The category is
    /// stored verbatim.
    pub fn record_transaction(
        &self,
        ledger: &mut Ledger,
        kind: &str,
        category: &str,
        amount: &str,
    ) -> BudgetResult<Recorded> {
        let kind: TransactionKind = kind.parse()?;
        let amount = parse_amount(amount)?;
        self.record(ledger, kind, category, amount)
    }

    /// Record an already-validated transaction
    ///
    /// If saving fails the transaction stays in `ledger` and the error is
    /// returned; memory and disk then disagree until the next successful save.
    /// Once the save succeeds the record stands, and an audit failure is only
    /// reported through [`Recorded::audit_error`].
    pub fn record(
        &self,
        ledger: &mut Ledger,
        kind: TransactionKind,
        category: &str,
        amount: f64,
    ) -> BudgetResult<Recorded> {
        if !amount.is_finite() {
            return Err(BudgetError::InvalidAmount(amount.to_string()));
        }

        let transaction = Transaction::new(category, amount);
        ledger.push(kind, transaction.clone());

        self.storage.ledger.save(ledger)?;
        let audit_error = self.storage.log_recorded(kind, &transaction).err();

        Ok(Recorded {
            transaction,
            audit_error,
        })
    }

    /// Total income, total expense and what remains
    pub fn calculate_budget(&self, ledger: &Ledger) -> BudgetSummary {
        BudgetSummary::generate(ledger)
    }

    /// Expense totals per category, in first-occurrence order
    pub fn analyze_expenses(&self, ledger: &Ledger) -> ExpenseAnalysis {
        ExpenseAnalysis::generate(ledger)
    }
}

/// Parse user-entered amount text as a finite number
///
/// Surrounding whitespace is ignored. NaN and infinities are rejected.
pub fn parse_amount(text: &str) -> BudgetResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| BudgetError::InvalidAmount(text.to_string()))
}
