//! Category and expense record models
//!
//! A category lives inside one month's record and carries its own expense
//! entries. The expense map is keyed by an opaque string; the UI keeps a
//! single entry per month under the month key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::document::null_as_default;

/// Status string for an expense that has been paid
pub const STATUS_PAID: &str = "paid";

/// Status string for an expense that is still outstanding
pub const STATUS_NOT_PAID: &str = "not paid";

/// Budgeted and actual spending for one category entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(budget: f64, amount: f64, status: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            budget,
            amount,
            status: status.into(),
            notes: notes.into(),
        }
    }

    /// Whether the status marks this expense as paid
    pub fn is_paid(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(STATUS_PAID)
    }

    /// Budget left after the spent amount (negative when overspent)
    pub fn remaining(&self) -> f64 {
        self.budget - self.amount
    }
}

/// An expense category for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier, shared across months for the "same" category
    #[serde(rename = "catId")]
    pub category_id: String,

    /// The group this category is displayed under
    #[serde(rename = "groupId", default)]
    pub group_id: String,

    /// Category name
    #[serde(rename = "categoryName", default)]
    pub category_name: String,

    /// Expense records by opaque key
    #[serde(default, deserialize_with = "null_as_default")]
    pub expense: BTreeMap<String, ExpenseRecord>,
}

impl Category {
    /// Create a new category with no expense records
    pub fn new(
        category_id: impl Into<String>,
        group_id: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            group_id: group_id.into(),
            category_name: category_name.into(),
            expense: BTreeMap::new(),
        }
    }

    /// Insert or replace the expense record stored under `key`
    pub fn set_expense(&mut self, key: impl Into<String>, record: ExpenseRecord) {
        self.expense.insert(key.into(), record);
    }

    /// Remove the expense record stored under `key`
    pub fn remove_expense(&mut self, key: &str) -> Option<ExpenseRecord> {
        self.expense.remove(key)
    }

    /// Look up the expense record stored under `key`
    pub fn expense_for(&self, key: &str) -> Option<&ExpenseRecord> {
        self.expense.get(key)
    }

    /// A copy with the same identity and name but no expense records
    pub fn without_expenses(&self) -> Self {
        Self::new(&self.category_id, &self.group_id, &self.category_name)
    }
}
