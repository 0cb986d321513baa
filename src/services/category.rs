//! Category service
//!
//! Narrow view of the repository for a month's categories, including the
//! carry-forward of categories from one month to another.

use crate::error::GocostResult;
use crate::models::Category;
use crate::storage::Repository;

/// Service for per-month category management
pub struct CategoryService<'a> {
    repository: &'a Repository,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }

    /// Categories of a month in insertion order
    pub fn get_categories_for_month(&self, month_key: &str) -> GocostResult<Vec<Category>> {
        self.repository.get_categories_for_month(month_key)
    }

    /// Append a category; the month record is created on demand
    pub fn add_category(&self, month_key: &str, category: Category) -> GocostResult<()> {
        self.repository.add_category(month_key, category)
    }

    /// Replace the first category with a matching id
    pub fn update_category(&self, month_key: &str, category: Category) -> GocostResult<()> {
        self.repository.update_category(month_key, category)
    }

    /// Remove the first category with a matching id
    pub fn delete_category(&self, month_key: &str, category_id: &str) -> GocostResult<()> {
        self.repository.delete_category(month_key, category_id)
    }

    /// Copy categories (without expenses) into another month
    ///
    /// Returns the number of categories copied.
    pub fn copy_categories_from_month(
        &self,
        from_month_key: &str,
        to_month_key: &str,
    ) -> GocostResult<usize> {
        self.repository
            .copy_categories_from_month(from_month_key, to_month_key)
    }
}
