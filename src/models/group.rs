//! Category group model
//!
//! Groups only exist for display: categories reference them by id and the
//! UI sorts them by `order`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display-level grouping of categories (e.g., "Housing", "Utilities")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Unique identifier
    #[serde(rename = "groupId")]
    pub group_id: String,

    /// Sort order for display
    #[serde(default)]
    pub order: i32,

    /// Group name
    #[serde(rename = "groupName", default)]
    pub group_name: String,
}

impl CategoryGroup {
    /// Create a new category group
    pub fn new(group_id: impl Into<String>, group_name: impl Into<String>, order: i32) -> Self {
        Self {
            group_id: group_id.into(),
            order,
            group_name: group_name.into(),
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let group = CategoryGroup::new("g1", "Utilities", 1);
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["groupId"], "g1");
        assert_eq!(json["groupName"], "Utilities");
        assert_eq!(json["order"], 1);
    }

    #[test]
    fn test_display() {
        let group = CategoryGroup::new("g1", "Utilities", 1);
        assert_eq!(group.to_string(), "Utilities");
    }
}
