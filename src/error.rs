//! Custom error types for gocost
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The repository, the codec and the service
//! layer all return [`GocostError`]; the UI shows its `Display` text verbatim.

use thiserror::Error;

/// The main error type for gocost operations
#[derive(Error, Debug)]
pub enum GocostError {
    /// A referenced entity, month, or source month has no record
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An add collided with an existing unique key
    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: &'static str,
        identifier: String,
    },

    /// Deleting the group would strand category references
    #[error("Category group '{group_name}' ({group_id}) is in use by categories in {month}")]
    InUse {
        group_id: String,
        group_name: String,
        month: String,
    },

    /// The expenses document could not be parsed
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// In-memory storage errors (poisoned lock)
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl GocostError {
    /// Create a "not found" error for category groups
    pub fn group_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category group",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for incomes
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for months
    pub fn month_not_found(month_key: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Month",
            identifier: month_key.into(),
        }
    }

    /// Create an "already exists" error for category groups
    pub fn group_exists(identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type: "Category group",
            identifier: identifier.into(),
        }
    }

    /// Create an "already exists" error for incomes
    pub fn income_exists(identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type: "Income",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an "already exists" error
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Check if this is an "in use" error
    pub fn is_in_use(&self) -> bool {
        matches!(self, Self::InUse { .. })
    }

    /// Check if the document failed to parse
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedDocument(_))
    }

    /// Check if this is a filesystem error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for GocostError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for gocost operations
pub type GocostResult<T> = Result<T, GocostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = GocostError::income_not_found("i1");
        assert_eq!(err.to_string(), "Income not found: i1");
        assert!(err.is_not_found());
        assert!(!err.is_already_exists());
    }

    #[test]
    fn test_month_not_found_names_month() {
        let err = GocostError::month_not_found("August-2024");
        assert_eq!(err.to_string(), "Month not found: August-2024");
    }

    #[test]
    fn test_in_use_names_group() {
        let err = GocostError::InUse {
            group_id: "g1".into(),
            group_name: "Utilities".into(),
            month: "May-2024".into(),
        };
        let message = err.to_string();
        assert!(message.contains("Utilities"));
        assert!(message.contains("g1"));
        assert!(err.is_in_use());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: GocostError = io_err.into();
        assert!(err.is_io());
    }
}
