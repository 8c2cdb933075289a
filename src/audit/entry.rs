//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Transaction, TransactionKind};

/// A single audit log entry, written once per recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the entry was written (UTC)
    pub timestamp: DateTime<Utc>,

    /// Which ledger sequence the transaction went into
    pub kind: TransactionKind,

    pub category: String,

    pub amount: f64,

    /// The transaction's own timestamp as stored in the ledger
    pub ledger_timestamp: String,
}

impl AuditEntry {
    /// Create an entry describing a newly recorded transaction
    pub fn recorded(kind: TransactionKind, transaction: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            category: transaction.category.clone(),
            amount: transaction.amount,
            ledger_timestamp: transaction.timestamp.clone(),
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] RECORD {} {:?} {:.2}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind.as_str(),
            self.category,
            self.amount
        )
    }
}
