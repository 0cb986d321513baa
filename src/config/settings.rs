//! User configuration for gocost
//!
//! `config.json` holds the default currency and where the expenses document
//! lives. It is created with defaults on first run; fields missing from an
//! existing file fall back to the same defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::GocostPaths;
use crate::error::GocostError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Currency used when none is configured
pub const DEFAULT_CURRENCY: &str = "RON";

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default currency for new documents
    #[serde(default)]
    pub currency: String,

    /// Directory holding the expenses document
    #[serde(rename = "dataDir", default)]
    pub data_dir: PathBuf,

    /// Path of the expenses document
    #[serde(rename = "dataFilename", default)]
    pub data_filename: PathBuf,
}

impl Config {
    /// Default configuration for the given paths
    pub fn defaults(paths: &GocostPaths) -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            data_dir: paths.default_data_dir(),
            data_filename: paths.default_data_file(),
        }
    }

    /// Load config.json, or create it with defaults if it doesn't exist
    pub fn load_or_create(paths: &GocostPaths) -> Result<Self, GocostError> {
        let config_path = paths.config_file();

        let loaded: Option<Config> = read_json(&config_path).map_err(|e| match e {
            GocostError::MalformedDocument(msg) => {
                GocostError::Config(format!("Failed to parse config file: {}", msg))
            }
            other => other,
        })?;

        match loaded {
            Some(config) => Ok(config.with_defaults(paths)),
            None => {
                let config = Self::defaults(paths);
                config.save(paths)?;
                Ok(config)
            }
        }
    }

    /// Save config.json atomically, creating the directory if needed
    pub fn save(&self, paths: &GocostPaths) -> Result<(), GocostError> {
        paths.ensure_base_dir()?;
        write_json_atomic(paths.config_file(), self)
    }

    /// Fill empty fields from defaults
    fn with_defaults(mut self, paths: &GocostPaths) -> Self {
        let defaults = Self::defaults(paths);
        if self.currency.trim().is_empty() {
            self.currency = defaults.currency;
        }
        if self.data_dir.as_os_str().is_empty() {
            self.data_dir = defaults.data_dir;
        }
        if self.data_filename.as_os_str().is_empty() {
            self.data_filename = self.data_dir.join(super::paths::DEFAULT_DATA_FILENAME);
        }
        self
    }

    /// Resolved path of the expenses document
    ///
    /// A relative `dataFilename` is taken relative to `dataDir`.
    pub fn data_file(&self) -> PathBuf {
        if self.data_filename.is_absolute() {
            self.data_filename.clone()
        } else {
            self.data_dir.join(&self.data_filename)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_paths() -> (TempDir, GocostPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GocostPaths::with_base_dir(temp_dir.path().join(".gocost"));
        (temp_dir, paths)
    }

    #[test]
    fn test_first_run_creates_defaults() {
        let (_temp_dir, paths) = test_paths();

        let config = Config::load_or_create(&paths).unwrap();

        assert!(paths.config_file().exists());
        assert_eq!(config.currency, "RON");
        assert_eq!(config.data_dir, paths.base_dir());
        assert_eq!(
            config.data_file(),
            paths.base_dir().join("expenses_data.json")
        );
    }

    #[test]
    fn test_wire_field_names() {
        let (_temp_dir, paths) = test_paths();
        Config::load_or_create(&paths).unwrap();

        let raw = fs::read_to_string(paths.config_file()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["currency"], "RON");
        assert!(json["dataDir"].is_string());
        assert!(json["dataFilename"].is_string());
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let (_temp_dir, paths) = test_paths();
        paths.ensure_base_dir().unwrap();
        fs::write(paths.config_file(), r#"{"currency": "EUR"}"#).unwrap();

        let config = Config::load_or_create(&paths).unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.data_file(), paths.default_data_file());
    }

    #[test]
    fn test_relative_data_filename() {
        let (_temp_dir, paths) = test_paths();
        paths.ensure_base_dir().unwrap();
        fs::write(
            paths.config_file(),
            r#"{"dataDir": "/srv/gocost", "dataFilename": "mine.json"}"#,
        )
        .unwrap();

        let config = Config::load_or_create(&paths).unwrap();
        assert_eq!(config.currency, "RON");
        assert_eq!(config.data_file(), PathBuf::from("/srv/gocost/mine.json"));
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, paths) = test_paths();
        let mut config = Config::defaults(&paths);
        config.currency = "USD".into();
        config.save(&paths).unwrap();

        let loaded = Config::load_or_create(&paths).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_config() {
        let (_temp_dir, paths) = test_paths();
        paths.ensure_base_dir().unwrap();
        fs::write(paths.config_file(), "not json").unwrap();

        let err = Config::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, GocostError::Config(_)));
    }
}
