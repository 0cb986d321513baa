//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the active view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::dialogs::{confirm, form, form::FormState};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.on_tick(),
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.active_dialog.clone() {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::Form => form::handle_key(app, key),
        ActiveDialog::Confirm(action) => confirm::handle_key(app, action, key),
        ActiveDialog::Help => app.close_dialog(),
    }
}

/// Handle keys with no dialog open
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('1') => app.switch_view(ActiveView::Month),
        KeyCode::Char('2') => app.switch_view(ActiveView::Groups),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => match app.active_view {
            ActiveView::Month => handle_month_key(app, key),
            ActiveView::Groups => handle_groups_key(app, key),
        },
    }
}

fn handle_month_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_panel_focus(),
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => app.prev_month(),
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => app.next_month(),
        KeyCode::Char('t') => app.this_month(),
        KeyCode::Char('c') => app.request_copy_from_previous(),
        KeyCode::Char('a') => match app.focused_panel {
            FocusedPanel::Incomes => app.open_form(FormState::add_income()),
            FocusedPanel::Categories => {
                let first_group = app.groups().into_iter().next().map(|g| g.group_name);
                app.open_form(FormState::add_category(first_group.as_deref()));
            }
        },
        KeyCode::Char('e') | KeyCode::Enter => match app.focused_panel {
            FocusedPanel::Incomes => match app.selected_income() {
                Some(income) => app.open_form(FormState::edit_income(&income)),
                None => app.set_status("No income selected"),
            },
            FocusedPanel::Categories => match app.selected_category() {
                Some(category) => {
                    let group_name = app
                        .groups()
                        .into_iter()
                        .find(|g| g.group_id == category.group_id)
                        .map(|g| g.group_name)
                        .unwrap_or_default();
                    app.open_form(FormState::edit_category(&category, &group_name));
                }
                None => app.set_status("No category selected"),
            },
        },
        KeyCode::Char('x') => match app.selected_category() {
            Some(category) => {
                let month_key = app.month_key();
                app.open_form(FormState::edit_expense(&category, &month_key));
            }
            None => app.set_status("No category selected"),
        },
        KeyCode::Char('p') => app.toggle_paid(),
        _ => {}
    }
}

fn handle_groups_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => {
            let next_order = app
                .groups()
                .iter()
                .map(|g| g.order)
                .max()
                .map_or(1, |order| order.saturating_add(1));
            app.open_form(FormState::add_group(next_order));
        }
        KeyCode::Char('e') | KeyCode::Enter => match app.selected_group() {
            Some(group) => app.open_form(FormState::edit_group(&group)),
            None => app.set_status("No category group selected"),
        },
        _ => {}
    }
}
