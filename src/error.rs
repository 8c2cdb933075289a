//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Transaction kind outside {income, expense}
    #[error("Invalid transaction type: '{0}' (expected 'income' or 'expense')")]
    InvalidKind(String),

    /// Amount text that does not parse as a finite number
    #[error("Invalid amount: '{0}'. Please enter a valid number")]
    InvalidAmount(String),

    /// Persisted ledger exists but is not well-formed
    #[error("Corrupt ledger file {path}: {reason}")]
    CorruptData { path: String, reason: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BudgetError {
    /// Create a corrupt-data error for the ledger at `path`
    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable input validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidKind(_) | Self::InvalidAmount(_))
    }

    /// Check if the persisted ledger could not be parsed
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
