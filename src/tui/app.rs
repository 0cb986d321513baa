//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It reads through the service layer on demand and keeps no copy of the
//! document; every failed operation ends up verbatim in the status line.

use crate::error::GocostResult;
use crate::models::{
    Category, CategoryGroup, ExpenseRecord, IncomeRecord, MonthKey, STATUS_NOT_PAID, STATUS_PAID,
};
use crate::services::{CategoryService, ExpenseService, GroupService, IncomeService};
use crate::storage::Repository;

use super::dialogs::form::FormState;

/// Ticks a status message stays visible (250ms each)
const STATUS_TICKS: u8 = 20;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Month,
    Groups,
}

/// Which panel of the month view has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Incomes,
    Categories,
}

/// A destructive action waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteIncome { income_id: String, description: String },
    DeleteCategory { category_id: String, name: String },
    DeleteGroup { group_id: String, name: String },
    CopyCategories { from: String, to: String },
}

impl PendingAction {
    /// Question shown in the confirmation dialog
    pub fn prompt(&self) -> String {
        match self {
            Self::DeleteIncome { description, .. } => format!("Delete income '{}'?", description),
            Self::DeleteCategory { name, .. } => format!("Delete category '{}'?", name),
            Self::DeleteGroup { name, .. } => format!("Delete category group '{}'?", name),
            Self::CopyCategories { from, to } => {
                format!("Replace categories of {} with those of {}?", to, from)
            }
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Form,
    Confirm(PendingAction),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The repository all services read and write through
    pub repository: &'a Repository,

    /// Currency used for display
    pub currency: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused in the month view
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Month being viewed
    pub current_month: MonthKey,

    pub selected_income_index: usize,
    pub selected_category_index: usize,
    pub selected_group_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
    status_ticks: u8,

    /// Form dialog state
    pub form: FormState,
}

impl<'a> App<'a> {
    /// Create a new App instance on the current month
    pub fn new(repository: &'a Repository, currency: impl Into<String>) -> Self {
        Self::with_month(repository, currency, MonthKey::current())
    }

    /// Create a new App instance on a given month
    pub fn with_month(
        repository: &'a Repository,
        currency: impl Into<String>,
        month: MonthKey,
    ) -> Self {
        Self {
            repository,
            currency: currency.into(),
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            current_month: month,
            selected_income_index: 0,
            selected_category_index: 0,
            selected_group_index: 0,
            status_message: None,
            status_ticks: 0,
            form: FormState::default(),
        }
    }

    /// Key of the month being viewed
    pub fn month_key(&self) -> String {
        self.current_month.to_string()
    }

    pub fn incomes(&self) -> Vec<IncomeRecord> {
        IncomeService::new(self.repository)
            .get_incomes_for_month(&self.month_key())
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<Category> {
        CategoryService::new(self.repository)
            .get_categories_for_month(&self.month_key())
            .unwrap_or_default()
    }

    pub fn groups(&self) -> Vec<CategoryGroup> {
        GroupService::new(self.repository)
            .get_all_groups()
            .unwrap_or_default()
    }

    pub fn selected_income(&self) -> Option<IncomeRecord> {
        self.incomes().into_iter().nth(self.selected_income_index)
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.categories().into_iter().nth(self.selected_category_index)
    }

    pub fn selected_group(&self) -> Option<CategoryGroup> {
        self.groups().into_iter().nth(self.selected_group_index)
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Age the status message
    pub fn on_tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    /// Show `success` on Ok, the error text on Err
    pub fn report<T>(&mut self, result: GocostResult<T>, success: impl Into<String>) -> bool {
        match result {
            Ok(_) => {
                self.set_status(success);
                true
            }
            Err(e) => {
                self.set_status(e.to_string());
                false
            }
        }
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.clamp_selection();
    }

    /// Toggle focus between the incomes and categories panels
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Incomes => FocusedPanel::Categories,
            FocusedPanel::Categories => FocusedPanel::Incomes,
        };
    }

    /// Open the form dialog with prepared state
    pub fn open_form(&mut self, form: FormState) {
        self.form = form;
        self.active_dialog = ActiveDialog::Form;
    }

    /// Ask for confirmation before running `action`
    pub fn open_confirm(&mut self, action: PendingAction) {
        self.active_dialog = ActiveDialog::Confirm(action);
    }

    pub fn open_help(&mut self) {
        self.active_dialog = ActiveDialog::Help;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    fn selection_mut(&mut self) -> (&mut usize, usize) {
        match (self.active_view, self.focused_panel) {
            (ActiveView::Groups, _) => {
                let len = self.groups().len();
                (&mut self.selected_group_index, len)
            }
            (ActiveView::Month, FocusedPanel::Incomes) => {
                let len = self.incomes().len();
                (&mut self.selected_income_index, len)
            }
            (ActiveView::Month, FocusedPanel::Categories) => {
                let len = self.categories().len();
                (&mut self.selected_category_index, len)
            }
        }
    }

    /// Move selection up in the focused list
    pub fn move_up(&mut self) {
        let (index, _) = self.selection_mut();
        *index = index.saturating_sub(1);
    }

    /// Move selection down in the focused list
    pub fn move_down(&mut self) {
        let (index, len) = self.selection_mut();
        if *index + 1 < len {
            *index += 1;
        }
    }

    /// Keep every selection inside its list after a change
    pub fn clamp_selection(&mut self) {
        let clamp = |index: usize, len: usize| index.min(len.saturating_sub(1));
        self.selected_income_index = clamp(self.selected_income_index, self.incomes().len());
        self.selected_category_index =
            clamp(self.selected_category_index, self.categories().len());
        self.selected_group_index = clamp(self.selected_group_index, self.groups().len());
    }

    fn go_to_month(&mut self, month: MonthKey) {
        self.current_month = month;
        self.selected_income_index = 0;
        self.selected_category_index = 0;
    }

    pub fn prev_month(&mut self) {
        self.go_to_month(self.current_month.prev());
    }

    pub fn next_month(&mut self) {
        self.go_to_month(self.current_month.next());
    }

    /// Jump back to today's month
    pub fn this_month(&mut self) {
        self.go_to_month(MonthKey::current());
    }

    /// Flip the paid status of the selected category's expense record
    ///
    /// A category with no record for this month gets one with zero amounts.
    pub fn toggle_paid(&mut self) {
        let Some(mut category) = self.selected_category() else {
            self.set_status("No category selected");
            return;
        };
        let month_key = self.month_key();
        let mut record = category
            .expense_for(&month_key)
            .cloned()
            .unwrap_or_else(|| ExpenseRecord::new(0.0, 0.0, STATUS_NOT_PAID, ""));
        record.status = if record.is_paid() {
            STATUS_NOT_PAID
        } else {
            STATUS_PAID
        }
        .to_string();

        let message = format!("'{}' marked {}", category.category_name, record.status);
        category.set_expense(&month_key, record);
        let result = ExpenseService::new(self.repository).update_category(&month_key, category);
        self.report(result, message);
    }

    /// Ask to delete whatever is selected in the focused list
    pub fn request_delete(&mut self) {
        let action = match (self.active_view, self.focused_panel) {
            (ActiveView::Groups, _) => self.selected_group().map(|g| PendingAction::DeleteGroup {
                group_id: g.group_id,
                name: g.group_name,
            }),
            (ActiveView::Month, FocusedPanel::Incomes) => {
                self.selected_income().map(|i| PendingAction::DeleteIncome {
                    income_id: i.income_id,
                    description: i.description,
                })
            }
            (ActiveView::Month, FocusedPanel::Categories) => {
                self.selected_category().map(|c| PendingAction::DeleteCategory {
                    category_id: c.category_id,
                    name: c.category_name,
                })
            }
        };

        match action {
            Some(action) => self.open_confirm(action),
            None => self.set_status("Nothing selected"),
        }
    }

    /// Ask to copy the previous month's categories into this month
    pub fn request_copy_from_previous(&mut self) {
        self.open_confirm(PendingAction::CopyCategories {
            from: self.current_month.prev().to_string(),
            to: self.month_key(),
        });
    }

    /// Run a confirmed action
    pub fn execute(&mut self, action: PendingAction) {
        let month_key = self.month_key();
        match action {
            PendingAction::DeleteIncome {
                income_id,
                description,
            } => {
                let result =
                    IncomeService::new(self.repository).delete_income(&month_key, &income_id);
                self.report(result, format!("Income '{}' deleted", description));
            }
            PendingAction::DeleteCategory { category_id, name } => {
                let result = CategoryService::new(self.repository)
                    .delete_category(&month_key, &category_id);
                self.report(result, format!("Category '{}' deleted", name));
            }
            PendingAction::DeleteGroup { group_id, name } => {
                let result = GroupService::new(self.repository).delete_group(&group_id);
                self.report(result, format!("Category group '{}' deleted", name));
            }
            PendingAction::CopyCategories { from, to } => {
                match CategoryService::new(self.repository).copy_categories_from_month(&from, &to)
                {
                    Ok(count) => {
                        self.set_status(format!("Copied {} categories from {}", count, from))
                    }
                    Err(e) => self.set_status(e.to_string()),
                }
            }
        }
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::create_test_repository;

    fn august() -> MonthKey {
        MonthKey::new(2024, 8).unwrap()
    }

    #[test]
    fn test_month_navigation_resets_selection() {
        let (_temp_dir, repository) = create_test_repository();
        let mut app = App::with_month(&repository, "USD", august());
        app.selected_category_index = 3;

        app.next_month();
        assert_eq!(app.month_key(), "September-2024");
        assert_eq!(app.selected_category_index, 0);

        app.prev_month();
        app.prev_month();
        assert_eq!(app.month_key(), "July-2024");
    }

    #[test]
    fn test_move_is_bounded() {
        let (_temp_dir, repository) = create_test_repository();
        for (id, name) in [("i1", "Salary"), ("i2", "Bonus")] {
            repository
                .add_income("August-2024", IncomeRecord::new(id, name, 10.0))
                .unwrap();
        }
        let mut app = App::with_month(&repository, "USD", august());

        app.move_down();
        app.move_down();
        assert_eq!(app.selected_income_index, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_income_index, 0);
    }

    #[test]
    fn test_toggle_paid_creates_record() {
        let (_temp_dir, repository) = create_test_repository();
        repository
            .add_category("August-2024", Category::new("c1", "g1", "Rent"))
            .unwrap();
        let mut app = App::with_month(&repository, "USD", august());
        app.focused_panel = FocusedPanel::Categories;

        app.toggle_paid();
        let record = app.selected_category().unwrap().expense_for("August-2024").cloned();
        assert!(record.unwrap().is_paid());

        app.toggle_paid();
        let record = app.selected_category().unwrap().expense_for("August-2024").cloned();
        assert_eq!(record.unwrap().status, STATUS_NOT_PAID);
    }

    #[test]
    fn test_delete_in_use_group_reports_error() {
        let (_temp_dir, repository) = create_test_repository();
        repository
            .add_group(CategoryGroup::new("g1", "Utilities", 1))
            .unwrap();
        repository
            .add_category("August-2024", Category::new("c1", "g1", "Water"))
            .unwrap();
        let mut app = App::with_month(&repository, "USD", august());
        app.switch_view(ActiveView::Groups);

        app.request_delete();
        let ActiveDialog::Confirm(action) = app.active_dialog.clone() else {
            panic!("expected confirmation");
        };
        app.close_dialog();
        app.execute(action);

        let status = app.status_message.clone().unwrap();
        assert!(status.contains("Utilities"));
        assert!(status.contains("August-2024"));
        assert_eq!(app.groups().len(), 1);
    }

    #[test]
    fn test_copy_from_previous_month() {
        let (_temp_dir, repository) = create_test_repository();
        repository
            .add_category("July-2024", Category::new("c1", "g1", "Rent"))
            .unwrap();
        let mut app = App::with_month(&repository, "USD", august());

        app.request_copy_from_previous();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(PendingAction::CopyCategories {
                from: "July-2024".into(),
                to: "August-2024".into(),
            })
        );
        app.execute(PendingAction::CopyCategories {
            from: "July-2024".into(),
            to: "August-2024".into(),
        });
        assert_eq!(app.categories().len(), 1);
    }

    #[test]
    fn test_status_expires() {
        let (_temp_dir, repository) = create_test_repository();
        let mut app = App::with_month(&repository, "USD", august());
        app.set_status("hello");
        for _ in 0..STATUS_TICKS {
            assert!(app.status_message.is_some());
            app.on_tick();
        }
        assert!(app.status_message.is_none());
    }
}
