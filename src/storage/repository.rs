//! File-backed repository for the expenses document
//!
//! The repository owns one [`DocumentRoot`] in memory and is the only writer
//! of its file. Every mutation runs under a single write lock: validate,
//! apply, save. If the save fails the document is restored from a snapshot
//! taken before the mutation, so memory and disk always agree.
//!
//! Entity operations live in sibling modules (`groups`, `incomes`,
//! `categories`) as further `impl Repository` blocks.

use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use crate::error::{GocostError, GocostResult};
use crate::models::{DocumentRoot, MonthlyRecord};

use super::file_io::{load_document, save_document};

/// In-memory owner of the expenses document
pub struct Repository {
    path: PathBuf,
    document: RwLock<DocumentRoot>,
}

impl Repository {
    /// Open the repository at `path`, creating an empty document if needed
    ///
    /// Nothing is written until the first successful mutation.
    pub fn open(path: impl Into<PathBuf>, default_currency: &str) -> GocostResult<Self> {
        let path = path.into();
        let document = load_document(&path, default_currency)?;
        info!(path = %path.display(), "opened repository");
        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Currency recorded in the document
    pub fn default_currency(&self) -> GocostResult<String> {
        Ok(self.read()?.default_currency.clone())
    }

    /// A full copy of the current document
    pub fn snapshot(&self) -> GocostResult<DocumentRoot> {
        Ok(self.read()?.clone())
    }

    /// Month keys that have a record, in key order
    pub fn month_keys(&self) -> GocostResult<Vec<String>> {
        Ok(self.read()?.monthly.keys().cloned().collect())
    }

    pub(super) fn read(&self) -> GocostResult<RwLockReadGuard<'_, DocumentRoot>> {
        self.document
            .read()
            .map_err(|e| GocostError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> GocostResult<RwLockWriteGuard<'_, DocumentRoot>> {
        self.document
            .write()
            .map_err(|e| GocostError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Apply `op` to the document and persist it
    ///
    /// The write lock is held across validation, mutation and save. On any
    /// error, from `op` or from the codec, the document is put back exactly
    /// as it was.
    pub(super) fn mutate<T>(
        &self,
        operation: &str,
        op: impl FnOnce(&mut DocumentRoot) -> GocostResult<T>,
    ) -> GocostResult<T> {
        let mut document = self.write()?;
        let snapshot = document.clone();

        let value = match op(&mut document) {
            Ok(value) => value,
            Err(err) => {
                *document = snapshot;
                return Err(err);
            }
        };

        if let Err(err) = save_document(&self.path, &document) {
            warn!(operation, error = %err, "save failed, rolling back");
            *document = snapshot;
            return Err(err);
        }

        info!(operation, "saved");
        Ok(value)
    }
}

/// Existing record for `month_key`, or `NotFound` naming the month
pub(super) fn month_mut<'a>(
    document: &'a mut DocumentRoot,
    month_key: &str,
) -> GocostResult<&'a mut MonthlyRecord> {
    document
        .monthly
        .get_mut(month_key)
        .ok_or_else(|| GocostError::month_not_found(month_key))
}

#[cfg(test)]
pub(super) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// Repository inside `<tmp>/data/` so tests can pull the directory away
    pub fn create_test_repo() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir(&data_dir).unwrap();
        let repo = Repository::open(data_dir.join("expenses_data.json"), "USD").unwrap();
        (temp_dir, repo)
    }

    /// Make every following save fail
    pub fn break_storage(temp_dir: &TempDir) {
        std::fs::remove_dir_all(temp_dir.path().join("data")).unwrap();
    }

    /// Open a second repository on the same file
    pub fn reopen(repo: &Repository) -> Repository {
        Repository::open(repo.path().to_path_buf(), "USD").unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::models::CategoryGroup;
    use std::fs;

    #[test]
    fn test_open_does_not_write() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(!repo.path().exists());
        assert_eq!(repo.default_currency().unwrap(), "USD");
        assert!(repo.month_keys().unwrap().is_empty());
    }

    #[test]
    fn test_open_malformed() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        fs::write(&path, "{invalid").unwrap();

        let err = Repository::open(&path, "USD").err().unwrap();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_mutation_persists() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add_group(CategoryGroup::new("g1", "Utilities", 1))
            .unwrap();

        let reopened = reopen(&repo);
        assert_eq!(reopened.snapshot().unwrap(), repo.snapshot().unwrap());
    }

    #[test]
    fn test_failed_op_leaves_document_untouched() {
        let (_temp_dir, repo) = create_test_repo();
        let before = repo.snapshot().unwrap();

        let result: GocostResult<()> = repo.mutate("test", |doc| {
            doc.default_currency = "EUR".into();
            Err(GocostError::month_not_found("nowhere"))
        });

        assert!(result.is_err());
        assert_eq!(repo.snapshot().unwrap(), before);
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let (temp_dir, repo) = create_test_repo();
        repo.add_group(CategoryGroup::new("g1", "Utilities", 1))
            .unwrap();
        let before = repo.snapshot().unwrap();

        break_storage(&temp_dir);
        let err = repo
            .add_group(CategoryGroup::new("g2", "Housing", 2))
            .unwrap_err();

        assert!(err.is_io());
        assert_eq!(repo.snapshot().unwrap(), before);
    }
}
