//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{GocostError, GocostResult};
use crate::export::{export, ExportFormat};
use crate::storage::Repository;

/// Export to `output`, or to stdout when no file is given
pub fn handle_export(
    repository: &Repository,
    format: ExportFormat,
    month: Option<&str>,
    output: Option<PathBuf>,
) -> GocostResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                GocostError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export(repository, format, month, &mut writer)?;
            writer
                .flush()
                .map_err(|e| GocostError::Export(e.to_string()))?;
            eprintln!("Exported to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export(repository, format, month, &mut writer)?;
            writer
                .flush()
                .map_err(|e| GocostError::Export(e.to_string()))?;
        }
    }
    Ok(())
}
