//! Core data models for the budget tracker
//!
//! This module contains the data structures that are persisted to the ledger
//! file: transactions, their kind, and the ledger that holds them.

pub mod kind;
pub mod ledger;
pub mod transaction;

pub use kind::TransactionKind;
pub use ledger::Ledger;
pub use transaction::{now_timestamp, Transaction, TIMESTAMP_FORMAT};
