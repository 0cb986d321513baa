//! Income service
//!
//! Narrow view of the repository for a month's sources of income.

use crate::error::GocostResult;
use crate::models::IncomeRecord;
use crate::storage::Repository;

/// Service for per-month income management
pub struct IncomeService<'a> {
    repository: &'a Repository,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }

    /// Incomes recorded for a month, empty when the month is absent
    pub fn get_incomes_for_month(&self, month_key: &str) -> GocostResult<Vec<IncomeRecord>> {
        self.repository.get_incomes_for_month(month_key)
    }

    /// Add an income; the month record is created on demand
    pub fn add_income(&self, month_key: &str, income: IncomeRecord) -> GocostResult<()> {
        self.repository.add_income(month_key, income)
    }

    /// Replace an income in place, keeping its position
    pub fn update_income(&self, month_key: &str, income: IncomeRecord) -> GocostResult<()> {
        self.repository.update_income(month_key, income)
    }

    /// Remove an income from a month
    pub fn delete_income(&self, month_key: &str, income_id: &str) -> GocostResult<()> {
        self.repository.delete_income(month_key, income_id)
    }
}
