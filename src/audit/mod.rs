//! Audit logging for the budget tracker
//!
//! Every recorded transaction is appended to a line-delimited JSON log next
//! to the settings file. The log is append-only and never read back into the
//! ledger.
//!
//! - `AuditEntry`: one recorded transaction with the time it was logged.
//! - `AuditLogger`: appends entries and reads them back for `history`.

mod entry;
mod logger;

pub use entry::AuditEntry;
pub use logger::AuditLogger;
