//! Configuration module for the budget tracker
//!
//! - Path resolution for the ledger, settings and audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
