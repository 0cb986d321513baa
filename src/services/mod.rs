//! Service layer for gocost
//!
//! Each service wraps the [`Repository`](crate::storage::Repository) and
//! exposes only the operations for one entity. They hold no state, add no
//! caching and hand repository errors back unchanged.

pub mod category;
pub mod expense;
pub mod group;
pub mod income;

pub use category::CategoryService;
pub use expense::ExpenseService;
pub use group::GroupService;
pub use income::IncomeService;
