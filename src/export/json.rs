//! JSON Export functionality
//!
//! A JSON export uses the same format as the expenses document, so a full
//! export can be used directly as a data file.

use std::io::Write;

use crate::error::{GocostError, GocostResult};
use crate::models::DocumentRoot;
use crate::storage::Repository;

/// The document to export, optionally limited to one month
///
/// Groups are always included since categories reference them.
pub fn scoped_document(repository: &Repository, month: Option<&str>) -> GocostResult<DocumentRoot> {
    let mut document = repository.snapshot()?;

    if let Some(month_key) = month {
        let record = document
            .monthly
            .remove(month_key)
            .ok_or_else(|| GocostError::month_not_found(month_key))?;
        document.monthly.clear();
        document.monthly.insert(month_key.to_string(), record);
    }

    Ok(document)
}

/// Export the document (or one month) as pretty-printed JSON
pub fn export_json<W: Write>(
    repository: &Repository,
    month: Option<&str>,
    writer: &mut W,
) -> GocostResult<()> {
    let document = scoped_document(repository, month)?;
    serde_json::to_writer_pretty(&mut *writer, &document)
        .map_err(|e| GocostError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| GocostError::Export(e.to_string()))?;
    Ok(())
}
