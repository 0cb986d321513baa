//! Category group operations

use crate::error::{GocostError, GocostResult};
use crate::models::CategoryGroup;

use super::repository::Repository;

impl Repository {
    /// All groups, ascending by `order` (ties by group id)
    pub fn get_all_groups(&self) -> GocostResult<Vec<CategoryGroup>> {
        let document = self.read()?;
        let mut list: Vec<_> = document.groups.values().cloned().collect();
        list.sort_by_key(|g| g.order);
        Ok(list)
    }

    /// Get a group by ID
    pub fn get_group_by_id(&self, group_id: &str) -> GocostResult<CategoryGroup> {
        self.read()?
            .groups
            .get(group_id)
            .cloned()
            .ok_or_else(|| GocostError::group_not_found(group_id))
    }

    /// Insert a new group
    pub fn add_group(&self, group: CategoryGroup) -> GocostResult<()> {
        self.mutate("add_group", |document| {
            if document.groups.contains_key(&group.group_id) {
                return Err(GocostError::group_exists(&group.group_id));
            }
            document.groups.insert(group.group_id.clone(), group);
            Ok(())
        })
    }

    /// Replace an existing group
    pub fn update_group(&self, group: CategoryGroup) -> GocostResult<()> {
        self.mutate("update_group", |document| {
            let existing = document
                .groups
                .get_mut(&group.group_id)
                .ok_or_else(|| GocostError::group_not_found(&group.group_id))?;
            *existing = group;
            Ok(())
        })
    }

    /// Delete a group no category references
    ///
    /// The reference scan runs before the existence check.
    pub fn delete_group(&self, group_id: &str) -> GocostResult<()> {
        self.mutate("delete_group", |document| {
            if let Some(month) = document.first_month_referencing(group_id) {
                let group_name = document
                    .groups
                    .get(group_id)
                    .map(|g| g.group_name.clone())
                    .unwrap_or_else(|| group_id.to_string());
                return Err(GocostError::InUse {
                    group_id: group_id.to_string(),
                    group_name,
                    month: month.to_string(),
                });
            }

            document
                .groups
                .remove(group_id)
                .map(|_| ())
                .ok_or_else(|| GocostError::group_not_found(group_id))
        })
    }
}
