//! Identifier generation
//!
//! Every primary key in the expenses document is an opaque string. The UI
//! mints them here; the repository only compares them.

use uuid::Uuid;

/// Create a new random identifier in canonical UUID text form
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
