//! Display formatting for terminal output
//!
//! Provides utilities for formatting a month's data as tables for the CLI.

pub mod month;

pub use month::{format_amount, format_category_table, format_income_table, format_summary_table};
