//! Storage layer for the budget tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail that accompanies every saved change.
//! Nothing is created on disk until something is written.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerStore;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{Transaction, TransactionKind};

/// Storage coordinator: the ledger file and the optional audit log
pub struct Storage {
    pub ledger: LedgerStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: BudgetPaths) -> Self {
        Self {
            ledger: LedgerStore::new(paths.ledger_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
        }
    }

    /// Stop writing audit entries
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Append an audit entry for a recorded transaction
    pub fn log_recorded(
        &self,
        kind: TransactionKind,
        transaction: &Transaction,
    ) -> Result<(), BudgetError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::recorded(kind, transaction)),
            None => Ok(()),
        }
    }
}
