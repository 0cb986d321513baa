//! Reports module for gocost
//!
//! Read-only computations over the repository for display.

pub mod month_summary;

pub use month_summary::{generate as generate_month_summary, GroupTotals, MonthSummary};
