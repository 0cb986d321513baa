//! Export module for gocost
//!
//! Provides data export in multiple formats:
//! - JSON: same format as the expenses document (usable as a backup)
//! - YAML: human-readable dump of the document
//! - CSV: one row per expense record

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::GocostResult;
use crate::storage::Repository;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_json, scoped_document};
pub use self::yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Export in the requested format
pub fn export<W: Write>(
    repository: &Repository,
    format: ExportFormat,
    month: Option<&str>,
    writer: &mut W,
) -> GocostResult<()> {
    match format {
        ExportFormat::Json => export_json(repository, month, writer),
        ExportFormat::Yaml => export_yaml(repository, month, writer),
        ExportFormat::Csv => export_expenses_csv(repository, month, writer),
    }
}
