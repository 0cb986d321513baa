//! YAML Export functionality
//!
//! Exports the document to YAML for human-readable backup.

use std::io::Write;

use chrono::Utc;

use crate::error::{GocostError, GocostResult};
use crate::storage::Repository;

use super::json::scoped_document;

/// Export the document (or one month) as YAML with a header comment
pub fn export_yaml<W: Write>(
    repository: &Repository,
    month: Option<&str>,
    writer: &mut W,
) -> GocostResult<()> {
    let document = scoped_document(repository, month)?;

    let header = format!(
        "# gocost export\n# Generated: {}\n# App Version: {}\n\n",
        Utc::now().to_rfc3339(),
        env!("CARGO_PKG_VERSION")
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| GocostError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &document).map_err(|e| GocostError::Export(e.to_string()))?;

    Ok(())
}
