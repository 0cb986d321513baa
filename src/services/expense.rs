//! Expense service
//!
//! Expense records live inside categories, so editing one means reading the
//! month's categories and writing the changed category back. This service
//! exposes exactly those two operations.

use crate::error::GocostResult;
use crate::models::Category;
use crate::storage::Repository;

/// Service for editing expense records via their category
pub struct ExpenseService<'a> {
    repository: &'a Repository,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }

    /// Categories of a month, carrying their expense records
    pub fn get_categories_for_month(&self, month_key: &str) -> GocostResult<Vec<Category>> {
        self.repository.get_categories_for_month(month_key)
    }

    /// Write back a category whose expense map was edited
    pub fn update_category(&self, month_key: &str, category: Category) -> GocostResult<()> {
        self.repository.update_category(month_key, category)
    }
}
