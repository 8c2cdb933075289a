//! Ledger repository for JSON storage
//!
//! Loads and saves the whole ledger snapshot to a single file.

use std::path::{Path, PathBuf};

use crate::error::BudgetError;
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

/// Persists a [`Ledger`] at a fixed path
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the ledger file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted ledger
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, or an empty one if nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` if the file exists but is not a ledger document.
    pub fn load(&self) -> Result<Ledger, BudgetError> {
        read_json(&self.path)
    }

    /// Overwrite the persisted ledger with `ledger`
    pub fn save(&self, ledger: &Ledger) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, ledger)
    }

    /// Check if a ledger has been saved
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
