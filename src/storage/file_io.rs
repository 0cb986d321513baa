//! File I/O utilities with atomic writes
//!
//! Provides the document codec (load/save of the expenses document) and the
//! generic JSON helpers it is built on. Writes go to a sibling temp file
//! that is synced and renamed over the target, so a partial file is never
//! observable.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::GocostError;
use crate::models::DocumentRoot;

/// Read JSON from a file, returning `None` if it is missing or blank
///
/// Parse failures are reported as [`GocostError::MalformedDocument`].
pub fn read_json<T, P>(path: P) -> Result<Option<T>, GocostError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| GocostError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| GocostError::MalformedDocument(format!("{}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The parent directory must already exist; a missing directory is an
/// I/O error rather than something to create implicitly.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), GocostError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path).map_err(|e| {
        GocostError::Io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let result = write_and_sync(file, data).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            GocostError::Io(format!(
                "Failed to replace {}: {}",
                path.display(),
                e
            ))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_and_sync<T: Serialize>(file: File, data: &T) -> Result<(), GocostError> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| GocostError::Io(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| GocostError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| GocostError::Io(format!("Failed to sync data: {}", e)))
}

/// Sibling temp path in the same directory (required for an atomic rename)
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Load the expenses document
///
/// A missing or empty file yields a fresh document with `default_currency`.
pub fn load_document<P: AsRef<Path>>(
    path: P,
    default_currency: &str,
) -> Result<DocumentRoot, GocostError> {
    let path = path.as_ref();
    match read_json::<DocumentRoot, _>(path)? {
        Some(document) => {
            debug!(
                path = %path.display(),
                groups = document.groups.len(),
                months = document.monthly.len(),
                "loaded expenses document"
            );
            Ok(document)
        }
        None => {
            debug!(path = %path.display(), "no expenses document, starting fresh");
            Ok(DocumentRoot::new(default_currency))
        }
    }
}

/// Persist the expenses document atomically
///
/// A document holding a NaN or infinite amount is refused before anything
/// is written, since it could not be loaded again.
pub fn save_document<P: AsRef<Path>>(path: P, document: &DocumentRoot) -> Result<(), GocostError> {
    let path = path.as_ref();
    if let Some(problem) = document.first_non_finite() {
        return Err(GocostError::Io(format!(
            "Refusing to write {}: {}",
            path.display(),
            problem
        )));
    }
    write_json_atomic(path, document)?;
    debug!(path = %path.display(), "saved expenses document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryGroup, IncomeRecord, MonthlyRecord};
    use tempfile::TempDir;

    fn sample_document() -> DocumentRoot {
        let mut doc = DocumentRoot::new("EUR");
        doc.groups
            .insert("g1".into(), CategoryGroup::new("g1", "Housing", 1));
        let mut month = MonthlyRecord::default();
        month.incomes.push(IncomeRecord::new("i1", "Salary", 4200.5));
        doc.monthly.insert("March-2024".into(), month);
        doc
    }

    #[test]
    fn test_load_missing_returns_fresh_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");

        let doc = load_document(&path, "USD").unwrap();
        assert_eq!(doc, DocumentRoot::new("USD"));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_empty_file_returns_fresh_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        fs::write(&path, "").unwrap();

        let doc = load_document(&path, "RON").unwrap();
        assert_eq!(doc.default_currency, "RON");
        assert!(doc.groups.is_empty());
        assert!(doc.monthly.is_empty());
    }

    #[test]
    fn test_load_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        fs::write(&path, "{invalid").unwrap();

        let err = load_document(&path, "USD").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("expenses_data.json"));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        let doc = sample_document();

        save_document(&path, &doc).unwrap();
        let loaded = load_document(&path, "USD").unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_loaded_currency_wins_over_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        save_document(&path, &sample_document()).unwrap();

        let loaded = load_document(&path, "USD").unwrap();
        assert_eq!(loaded.default_currency, "EUR");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");

        save_document(&path, &sample_document()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("expenses_data.json.tmp").exists());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("expenses_data.json");

        let err = save_document(&path, &sample_document()).unwrap_err();
        assert!(err.is_io());
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        let doc = sample_document();
        save_document(&path, &doc).unwrap();

        // A directory squatting on the temp path makes the next write fail
        fs::create_dir(temp_dir.path().join("expenses_data.json.tmp")).unwrap();
        assert!(save_document(&path, &DocumentRoot::new("USD")).is_err());

        assert_eq!(load_document(&path, "USD").unwrap(), doc);
    }

    #[test]
    fn test_save_rejects_non_finite_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        let doc = sample_document();
        save_document(&path, &doc).unwrap();

        let mut bad = doc.clone();
        bad.monthly.get_mut("March-2024").unwrap().incomes[0].amount = f64::NAN;
        let err = save_document(&path, &bad).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("i1"));

        assert_eq!(load_document(&path, "USD").unwrap(), doc);
        assert!(!temp_dir.path().join("expenses_data.json.tmp").exists());
    }

    #[test]
    fn test_written_file_uses_wire_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        save_document(&path, &sample_document()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"defaultCurrency\""));
        assert!(raw.contains("\"CategoryGroups\""));
        assert!(raw.contains("\"monthlyData\""));
        assert!(raw.contains("\"incomeId\""));
    }
}
