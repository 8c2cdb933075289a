//! Service layer for the budget tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and persistence of recorded transactions.

pub mod ledger;

pub use ledger::{parse_amount, LedgerService, Recorded};
