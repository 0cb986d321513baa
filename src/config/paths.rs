//! Path management for gocost
//!
//! ## Path Resolution Order
//!
//! 1. Explicit override (`--home` flag or `GOCOST_HOME` environment variable)
//! 2. `~/.gocost`, with the home directory resolved by the `directories` crate

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::GocostError;

/// Name of the configuration directory under the user's home
pub const CONFIG_DIR_NAME: &str = ".gocost";

/// Default file name of the expenses document
pub const DEFAULT_DATA_FILENAME: &str = "expenses_data.json";

/// Manages all paths used by gocost
#[derive(Debug, Clone)]
pub struct GocostPaths {
    /// Base directory for configuration (and, by default, data)
    base_dir: PathBuf,
}

impl GocostPaths {
    /// Resolve paths, honouring an explicit override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn new(override_dir: Option<PathBuf>) -> Result<Self, GocostError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => BaseDirs::new()
                .map(|dirs| dirs.home_dir().join(CONFIG_DIR_NAME))
                .ok_or_else(|| {
                    GocostError::Config("Could not determine home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.gocost/)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to config.json
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default data directory (same as the base directory)
    pub fn default_data_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Default path of the expenses document
    pub fn default_data_file(&self) -> PathBuf {
        self.default_data_dir().join(DEFAULT_DATA_FILENAME)
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("gocost.log")
    }

    /// Create the base directory (mode 0755 on Unix) if it is missing
    pub fn ensure_base_dir(&self) -> Result<(), GocostError> {
        create_dir_all_0755(&self.base_dir)
    }

    /// Check if gocost has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.config_file().exists()
    }
}

/// Create a directory tree with permissions 0755
pub fn create_dir_all_0755(dir: &Path) -> Result<(), GocostError> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(dir).map_err(|e| {
        GocostError::Io(format!(
            "Failed to create directory {}: {}",
            dir.display(),
            e
        ))
    })
}
