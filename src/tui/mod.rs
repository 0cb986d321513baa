//! Terminal User Interface module
//!
//! This module provides the interactive TUI for gocost using ratatui. It
//! shows one month at a time (incomes, categories and their expense
//! records) plus the list of category groups, with modal dialogs for data
//! entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
