//! Ledger model
//!
//! The full snapshot persisted between runs: incomes, expenses and a reserved
//! `pending` list that no operation writes to. Insertion order is the only
//! ordering.

use serde::{Deserialize, Serialize};

use super::kind::TransactionKind;
use super::transaction::Transaction;

/// All recorded transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub incomes: Vec<Transaction>,

    #[serde(default)]
    pub expenses: Vec<Transaction>,

    /// Reserved; kept so the file format stays stable
    #[serde(default)]
    pub pending: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Transactions of the given kind, in insertion order
    pub fn transactions(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            TransactionKind::Income => &self.incomes,
            TransactionKind::Expense => &self.expenses,
        }
    }

    /// Append a transaction to the sequence matching `kind`
    pub fn push(&mut self, kind: TransactionKind, transaction: Transaction) {
        match kind {
            TransactionKind::Income => self.incomes.push(transaction),
            TransactionKind::Expense => self.expenses.push(transaction),
        }
    }

    /// Total number of recorded transactions
    pub fn len(&self) -> usize {
        self.incomes.len() + self.expenses.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
