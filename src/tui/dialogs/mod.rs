//! Dialog modules for the TUI
//!
//! Contains modal dialogs for data entry, confirmation and help

pub mod confirm;
pub mod form;
pub mod help;
