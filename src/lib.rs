//! gocost - Terminal-based monthly expense tracker
//!
//! This library provides the core functionality for gocost. Incomes and
//! categorised expenses are recorded per month in a single JSON document,
//! edited through a file-backed repository that saves after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (groups, categories, expenses, incomes, months)
//! - `storage`: JSON document codec and the repository
//! - `services`: Per-entity façade over the repository
//! - `reports`: Month totals
//! - `display`: Table formatting for the CLI
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use gocost::config::{Config, GocostPaths};
//! use gocost::storage::Repository;
//!
//! let paths = GocostPaths::new(None)?;
//! let config = Config::load_or_create(&paths)?;
//! let repository = Repository::open(config.data_file(), &config.currency)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{GocostError, GocostResult};
