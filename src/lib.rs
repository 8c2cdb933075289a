//! Budget Tracker - console ledger for income and expenses
//!
//! Records income and expense transactions in a single JSON file, reports
//! total income, total expense and the remaining budget, and breaks expenses
//! down by category.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, their kind, and the ledger
//! - `storage`: JSON file storage for the ledger
//! - `services`: Validation and recording of transactions
//! - `reports`: Budget summary and expense analysis
//! - `audit`: Append-only log of recorded transactions
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::BudgetPaths;
//! use budget_tracker::services::LedgerService;
//! use budget_tracker::storage::Storage;
//!
//! let storage = Storage::new(BudgetPaths::new()?);
//! let service = LedgerService::new(&storage);
//! let mut ledger = service.load()?;
//! service.record_transaction(&mut ledger, "expense", "Food", "12.50")?;
//! println!("{}", service.calculate_budget(&ledger).format_terminal(2));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::BudgetError;
