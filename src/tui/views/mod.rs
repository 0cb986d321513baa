//! TUI Views module
//!
//! Contains the month and category group views, plus the status bar.

pub mod groups;
pub mod month;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    match app.active_view {
        ActiveView::Month => month::render(frame, app, layout.main),
        ActiveView::Groups => groups::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Form => dialogs::form::render(frame, app),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, action),
        ActiveDialog::Help => dialogs::help::render(frame, app),
    }
}
