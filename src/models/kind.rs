//! Transaction kind
//!
//! The two kinds of money movement the ledger tracks. Parsing is the only
//! gate between user input and the ledger's sequences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Whether a transaction is money in or money out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Lowercase name as typed by the user
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = BudgetError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(BudgetError::InvalidKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("INCOME".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!(" Expense ".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
    }

    #[test]
    fn test_parse_rejects_other_kinds() {
        for input in ["savings", "", "incomes", "transfer"] {
            let err = input.parse::<TransactionKind>().unwrap_err();
            assert!(matches!(err, BudgetError::InvalidKind(ref s) if s == input));
        }
    }

    #[test]
    fn test_display_and_as_str() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.as_str(), "expense");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }
}
