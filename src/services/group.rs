//! Category group service
//!
//! Narrow view of the repository for managing category groups.

use crate::error::GocostResult;
use crate::models::CategoryGroup;
use crate::storage::Repository;

/// Service for category group management
pub struct GroupService<'a> {
    repository: &'a Repository,
}

impl<'a> GroupService<'a> {
    /// Create a new group service
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }

    /// All groups ordered by `order`
    pub fn get_all_groups(&self) -> GocostResult<Vec<CategoryGroup>> {
        self.repository.get_all_groups()
    }

    /// Look up one group by id
    pub fn get_group_by_id(&self, group_id: &str) -> GocostResult<CategoryGroup> {
        self.repository.get_group_by_id(group_id)
    }

    /// Add a group; fails with `AlreadyExists` on a duplicate id
    pub fn add_group(&self, group: CategoryGroup) -> GocostResult<()> {
        self.repository.add_group(group)
    }

    /// Replace the name and order of an existing group
    pub fn update_group(&self, group: CategoryGroup) -> GocostResult<()> {
        self.repository.update_group(group)
    }

    /// Delete a group; fails with `InUse` while any category references it
    pub fn delete_group(&self, group_id: &str) -> GocostResult<()> {
        self.repository.delete_group(group_id)
    }
}
