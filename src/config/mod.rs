//! Configuration module for gocost
//!
//! This module provides configuration management including:
//! - Path resolution for the `.gocost` directory
//! - The `config.json` document (currency and data file location)

pub mod paths;
pub mod settings;

pub use paths::GocostPaths;
pub use settings::Config;
