//! Per-month category operations and the month-to-month copy
//!
//! Category ids are not required to be unique within a month; updates and
//! deletes act on the first match.

use tracing::info;

use crate::error::{GocostError, GocostResult};
use crate::models::{Category, MonthlyRecord};

use super::repository::{month_mut, Repository};

impl Repository {
    /// Categories for a month in insertion order; empty if the month is absent
    pub fn get_categories_for_month(&self, month_key: &str) -> GocostResult<Vec<Category>> {
        Ok(self
            .read()?
            .monthly
            .get(month_key)
            .map(|m| m.categories.clone())
            .unwrap_or_default())
    }

    /// Append a category, creating the month record if absent
    pub fn add_category(&self, month_key: &str, category: Category) -> GocostResult<()> {
        self.mutate("add_category", |document| {
            document
                .monthly
                .entry(month_key.to_string())
                .or_default()
                .categories
                .push(category);
            Ok(())
        })
    }

    /// Replace the first category with a matching id
    pub fn update_category(&self, month_key: &str, category: Category) -> GocostResult<()> {
        self.mutate("update_category", |document| {
            let month = month_mut(document, month_key)?;
            let existing = month
                .categories
                .iter_mut()
                .find(|c| c.category_id == category.category_id)
                .ok_or_else(|| GocostError::category_not_found(&category.category_id))?;
            *existing = category;
            Ok(())
        })
    }

    /// Remove the first category with a matching id
    pub fn delete_category(&self, month_key: &str, category_id: &str) -> GocostResult<()> {
        self.mutate("delete_category", |document| {
            let month = month_mut(document, month_key)?;
            let index = month
                .categories
                .iter()
                .position(|c| c.category_id == category_id)
                .ok_or_else(|| GocostError::category_not_found(category_id))?;
            month.categories.remove(index);
            Ok(())
        })
    }

    /// Replace `to_month_key`'s categories with expense-free copies of
    /// `from_month_key`'s, keeping its incomes
    ///
    /// Returns the number of categories copied.
    pub fn copy_categories_from_month(
        &self,
        from_month_key: &str,
        to_month_key: &str,
    ) -> GocostResult<usize> {
        self.mutate("copy_categories_from_month", |document| {
            let copied: Vec<Category> = document
                .monthly
                .get(from_month_key)
                .filter(|m| !m.categories.is_empty())
                .ok_or_else(|| GocostError::NotFound {
                    entity_type: "Categories for month",
                    identifier: from_month_key.to_string(),
                })?
                .categories
                .iter()
                .map(Category::without_expenses)
                .collect();

            let count = copied.len();
            let destination = document
                .monthly
                .entry(to_month_key.to_string())
                .or_insert_with(MonthlyRecord::default);
            destination.categories = copied;

            info!(
                from = from_month_key,
                to = to_month_key,
                count,
                "copied categories"
            );
            Ok(count)
        })
    }
}
