//! Transaction model
//!
//! A single recorded money movement. Transactions carry no identity beyond
//! their position in the ledger.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout written for new transactions (ISO-8601, microseconds, local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-form category, stored verbatim
    pub category: String,

    /// Amount in the ledger's single unit; sign is not enforced
    pub amount: f64,

    /// ISO-8601 creation time
    pub timestamp: String,
}

impl Transaction {
    /// Create a transaction stamped with the current local time
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self::with_timestamp(category, amount, now_timestamp())
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_timestamp(
        category: impl Into<String>,
        amount: f64,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            amount,
            timestamp: timestamp.into(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} ({})", self.category, self.amount, self.timestamp)
    }
}

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn now_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
}
