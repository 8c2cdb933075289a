//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod history;
pub mod menu;
pub mod report;
pub mod transaction;

pub use history::handle_history_command;
pub use menu::run_menu;
pub use report::{handle_budget_command, handle_expenses_command};
pub use transaction::handle_add_command;
