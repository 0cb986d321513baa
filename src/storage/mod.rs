//! Storage layer for gocost
//!
//! Provides the JSON document codec with atomic writes and the
//! [`Repository`] that owns the in-memory document.

pub mod categories;
pub mod file_io;
pub mod groups;
pub mod incomes;
pub mod repository;

pub use file_io::{load_document, read_json, save_document, write_json_atomic};
pub use repository::Repository;
