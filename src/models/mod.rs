//! Core data models for gocost
//!
//! This module contains the data structures that make up the expenses
//! document: category groups, categories with their expense records,
//! incomes, and the per-month records that hold them.

pub mod category;
pub mod document;
pub mod group;
pub mod ids;
pub mod income;
pub mod month;

pub use category::{Category, ExpenseRecord, STATUS_NOT_PAID, STATUS_PAID};
pub use document::{DocumentRoot, MonthlyRecord};
pub use group::CategoryGroup;
pub use ids::new_id;
pub use income::IncomeRecord;
pub use month::MonthKey;
