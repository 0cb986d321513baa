//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod month;

pub use export::handle_export;
pub use month::{handle_copy_categories, handle_months, handle_show, month_or_current};
