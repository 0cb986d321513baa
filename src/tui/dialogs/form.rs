//! Entry form dialog
//!
//! One modal form serves groups, incomes, categories and expense records.
//! The [`FormKind`] decides which fields exist and what saving does; input
//! is validated here and the result goes through the service layer.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{
    new_id, Category, CategoryGroup, ExpenseRecord, IncomeRecord, STATUS_NOT_PAID, STATUS_PAID,
};
use crate::services::{CategoryService, ExpenseService, GroupService, IncomeService};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// What the form edits
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormKind {
    #[default]
    AddGroup,
    EditGroup(String),
    AddIncome,
    EditIncome(String),
    AddCategory,
    /// Carries the original so its expense records survive the edit
    EditCategory(Category),
    EditExpense(Category),
}

/// State for the form dialog
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub kind: FormKind,
    pub fields: Vec<TextInput>,
    pub focus: usize,
    pub error_message: Option<String>,
}

impl FormState {
    fn with_fields(kind: FormKind, fields: Vec<TextInput>) -> Self {
        Self {
            kind,
            fields,
            focus: 0,
            error_message: None,
        }
    }

    pub fn add_group(next_order: i32) -> Self {
        Self::with_fields(
            FormKind::AddGroup,
            vec![
                TextInput::new().label("Name").placeholder("e.g. Utilities"),
                TextInput::new()
                    .label("Order")
                    .content(next_order.to_string()),
            ],
        )
    }

    pub fn edit_group(group: &CategoryGroup) -> Self {
        Self::with_fields(
            FormKind::EditGroup(group.group_id.clone()),
            vec![
                TextInput::new().label("Name").content(&group.group_name),
                TextInput::new()
                    .label("Order")
                    .content(group.order.to_string()),
            ],
        )
    }

    pub fn add_income() -> Self {
        Self::with_fields(
            FormKind::AddIncome,
            vec![
                TextInput::new()
                    .label("Description")
                    .placeholder("e.g. Salary"),
                TextInput::new().label("Amount").placeholder("0.00"),
            ],
        )
    }

    pub fn edit_income(income: &IncomeRecord) -> Self {
        Self::with_fields(
            FormKind::EditIncome(income.income_id.clone()),
            vec![
                TextInput::new()
                    .label("Description")
                    .content(&income.description),
                TextInput::new()
                    .label("Amount")
                    .content(format_number(income.amount)),
            ],
        )
    }

    pub fn add_category(default_group: Option<&str>) -> Self {
        Self::with_fields(
            FormKind::AddCategory,
            vec![
                TextInput::new().label("Name").placeholder("e.g. Electricity"),
                TextInput::new()
                    .label("Group")
                    .placeholder("group name")
                    .content(default_group.unwrap_or_default()),
            ],
        )
    }

    pub fn edit_category(category: &Category, group_name: &str) -> Self {
        Self::with_fields(
            FormKind::EditCategory(category.clone()),
            vec![
                TextInput::new()
                    .label("Name")
                    .content(&category.category_name),
                TextInput::new().label("Group").content(group_name),
            ],
        )
    }

    /// Form for the category's record under `month_key`
    pub fn edit_expense(category: &Category, month_key: &str) -> Self {
        let record = category.expense_for(month_key).cloned().unwrap_or_default();
        let status = if record.status.is_empty() {
            STATUS_NOT_PAID.to_string()
        } else {
            record.status
        };
        Self::with_fields(
            FormKind::EditExpense(category.clone()),
            vec![
                TextInput::new()
                    .label("Budget")
                    .content(format_number(record.budget)),
                TextInput::new()
                    .label("Spent")
                    .content(format_number(record.amount)),
                TextInput::new()
                    .label("Status")
                    .placeholder("paid / not paid")
                    .content(status),
                TextInput::new().label("Notes").content(record.notes),
            ],
        )
    }

    /// Dialog title
    pub fn title(&self) -> String {
        match &self.kind {
            FormKind::AddGroup => " Add Category Group ".to_string(),
            FormKind::EditGroup(_) => " Edit Category Group ".to_string(),
            FormKind::AddIncome => " Add Income ".to_string(),
            FormKind::EditIncome(_) => " Edit Income ".to_string(),
            FormKind::AddCategory => " Add Category ".to_string(),
            FormKind::EditCategory(_) => " Edit Category ".to_string(),
            FormKind::EditExpense(category) => format!(" Expense: {} ", category.category_name),
        }
    }

    /// Trimmed value of field `index`
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value().trim()).unwrap_or("")
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        self.fields.get_mut(self.focus)
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

fn format_number(value: f64) -> String {
    format!("{:.2}", value)
}

fn require<'s>(value: &'s str, label: &str) -> Result<&'s str, String> {
    if value.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(value)
    }
}

/// Parse an amount; blank means zero
pub fn parse_amount(value: &str, label: &str) -> Result<f64, String> {
    if value.is_empty() {
        return Ok(0.0);
    }
    value
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{} must be a number, got '{}'", label, value))
}

fn parse_order(value: &str) -> Result<i32, String> {
    value
        .parse()
        .map_err(|_| format!("Order must be a whole number, got '{}'", value))
}

/// Normalise a typed status to one of the two status strings
pub fn parse_status(value: &str) -> Result<&'static str, String> {
    match value.to_lowercase().as_str() {
        "paid" | "p" | "yes" | "y" => Ok(STATUS_PAID),
        "" | "not paid" | "unpaid" | "n" | "no" => Ok(STATUS_NOT_PAID),
        _ => Err(format!("Status must be 'paid' or 'not paid', got '{}'", value)),
    }
}

/// Resolve a group by name, ignoring case
pub fn find_group<'g>(groups: &'g [CategoryGroup], name: &str) -> Result<&'g CategoryGroup, String> {
    if groups.is_empty() {
        return Err("Create a category group first (view 2)".to_string());
    }
    groups
        .iter()
        .find(|g| g.group_name.eq_ignore_ascii_case(name))
        .ok_or_else(|| format!("No category group named '{}'", name))
}

/// Validate and save; returns the status message on success
fn save(app: &App, form: &FormState) -> Result<String, String> {
    let repository = app.repository;
    let month_key = app.month_key();

    match &form.kind {
        FormKind::AddGroup | FormKind::EditGroup(_) => {
            let name = require(form.value(0), "Group name")?;
            let order = parse_order(form.value(1))?;
            let service = GroupService::new(repository);
            if let FormKind::EditGroup(group_id) = &form.kind {
                service
                    .update_group(CategoryGroup::new(group_id, name, order))
                    .map_err(|e| e.to_string())?;
                Ok(format!("Category group '{}' updated", name))
            } else {
                service
                    .add_group(CategoryGroup::new(new_id(), name, order))
                    .map_err(|e| e.to_string())?;
                Ok(format!("Category group '{}' created", name))
            }
        }
        FormKind::AddIncome | FormKind::EditIncome(_) => {
            let description = require(form.value(0), "Description")?;
            let amount = parse_amount(form.value(1), "Amount")?;
            let service = IncomeService::new(repository);
            if let FormKind::EditIncome(income_id) = &form.kind {
                service
                    .update_income(&month_key, IncomeRecord::new(income_id, description, amount))
                    .map_err(|e| e.to_string())?;
                Ok(format!("Income '{}' updated", description))
            } else {
                service
                    .add_income(&month_key, IncomeRecord::new(new_id(), description, amount))
                    .map_err(|e| e.to_string())?;
                Ok(format!("Income '{}' added", description))
            }
        }
        FormKind::AddCategory | FormKind::EditCategory(_) => {
            let name = require(form.value(0), "Category name")?;
            let groups = app.groups();
            let group = find_group(&groups, form.value(1))?;
            let service = CategoryService::new(repository);
            if let FormKind::EditCategory(original) = &form.kind {
                let mut category = original.clone();
                category.category_name = name.to_string();
                category.group_id = group.group_id.clone();
                service
                    .update_category(&month_key, category)
                    .map_err(|e| e.to_string())?;
                Ok(format!("Category '{}' updated", name))
            } else {
                service
                    .add_category(&month_key, Category::new(new_id(), &group.group_id, name))
                    .map_err(|e| e.to_string())?;
                Ok(format!("Category '{}' added to {}", name, group.group_name))
            }
        }
        FormKind::EditExpense(original) => {
            let budget = parse_amount(form.value(0), "Budget")?;
            let amount = parse_amount(form.value(1), "Spent")?;
            let status = parse_status(form.value(2))?;
            let notes = form.value(3);

            let mut category = original.clone();
            category.set_expense(&month_key, ExpenseRecord::new(budget, amount, status, notes));
            ExpenseService::new(repository)
                .update_category(&month_key, category)
                .map_err(|e| e.to_string())?;
            Ok(format!("Expense for '{}' saved", original.category_name))
        }
    }
}

/// Handle key input for the form dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => match save(app, &app.form) {
            Ok(message) => {
                app.close_dialog();
                app.set_status(message);
                app.clamp_selection();
            }
            Err(e) => app.form.set_error(e),
        },
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
        code => {
            let form = &mut app.form;
            form.clear_error();
            if let Some(input) = form.focused_input() {
                match code {
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    KeyCode::Char(c) => input.insert(c),
                    _ => {}
                }
            }
        }
    }
}

/// Render the form dialog
pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.form;
    let height = form.fields.len() as u16 + 6;
    let area = centered_rect_fixed(60, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(form.title())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let mut constraints: Vec<Constraint> =
        form.fields.iter().map(|_| Constraint::Length(1)).collect();
    constraints.extend([
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Error
        Constraint::Length(1), // Buttons
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        frame.render_widget(Paragraph::new(field.line(i == form.focus)), chunks[i]);
    }

    let n = form.fields.len();
    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[n + 1]);
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[n + 2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;
    use crate::services::test_support::create_test_repository;
    use crate::tui::app::ActiveDialog;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn august() -> MonthKey {
        MonthKey::new(2024, 8).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("", "Amount"), Ok(0.0));
        assert_eq!(parse_amount("1,250.50", "Amount"), Ok(1250.5));
        assert_eq!(parse_amount("-3", "Amount"), Ok(-3.0));
        assert!(parse_amount("abc", "Amount").is_err());
        assert!(parse_amount("NaN", "Amount").is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("Paid"), Ok(STATUS_PAID));
        assert_eq!(parse_status(""), Ok(STATUS_NOT_PAID));
        assert_eq!(parse_status("NOT PAID"), Ok(STATUS_NOT_PAID));
        assert!(parse_status("maybe").is_err());
    }

    #[test]
    fn test_find_group_ignores_case() {
        let groups = vec![CategoryGroup::new("g1", "Utilities", 1)];
        assert_eq!(find_group(&groups, "utilities").unwrap().group_id, "g1");
        assert!(find_group(&groups, "Food").is_err());
        assert!(find_group(&[], "Food").is_err());
    }

    #[test]
    fn test_field_focus_wraps() {
        let mut form = FormState::add_income();
        form.prev_field();
        assert_eq!(form.focus, 1);
        form.next_field();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_add_income_through_form() {
        let (_temp_dir, repository) = create_test_repository();
        let mut app = App::with_month(&repository, "USD", august());
        app.open_form(FormState::add_income());

        type_text(&mut app, "Salary");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "5000");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::None);
        let incomes = app.incomes();
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].description, "Salary");
        assert_eq!(incomes[0].amount, 5000.0);
    }

    #[test]
    fn test_invalid_input_keeps_dialog_open() {
        let (_temp_dir, repository) = create_test_repository();
        let mut app = App::with_month(&repository, "USD", august());
        app.open_form(FormState::add_category(None));

        type_text(&mut app, "Water");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::Form);
        assert!(app.form.error_message.is_some());
        assert!(app.categories().is_empty());
    }

    #[test]
    fn test_edit_category_keeps_expenses() {
        let (_temp_dir, repository) = create_test_repository();
        repository
            .add_group(CategoryGroup::new("g1", "Utilities", 1))
            .unwrap();
        repository
            .add_group(CategoryGroup::new("g2", "Housing", 2))
            .unwrap();
        let mut category = Category::new("c1", "g1", "Water");
        category.set_expense("August-2024", ExpenseRecord::new(50.0, 40.0, STATUS_PAID, ""));
        repository.add_category("August-2024", category.clone()).unwrap();

        let mut app = App::with_month(&repository, "USD", august());
        app.open_form(FormState::edit_category(&category, "Utilities"));
        app.form.focus = 1;
        for _ in 0.."Utilities".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "housing");
        press(&mut app, KeyCode::Enter);

        let stored = &app.categories()[0];
        assert_eq!(stored.group_id, "g2");
        assert_eq!(stored.expense, category.expense);
    }

    #[test]
    fn test_edit_expense_through_form() {
        let (_temp_dir, repository) = create_test_repository();
        let category = Category::new("c1", "g1", "Rent");
        repository.add_category("August-2024", category.clone()).unwrap();

        let mut app = App::with_month(&repository, "USD", august());
        let form = FormState::edit_expense(&category, "August-2024");
        assert_eq!(form.value(0), "0.00");
        assert_eq!(form.value(2), STATUS_NOT_PAID);
        app.open_form(form);

        app.form.fields[0] = TextInput::new().label("Budget").content("1200");
        app.form.fields[2] = TextInput::new().label("Status").content("paid");
        press(&mut app, KeyCode::Enter);

        let record = app.categories()[0]
            .expense_for("August-2024")
            .cloned()
            .unwrap();
        assert_eq!(record, ExpenseRecord::new(1200.0, 0.0, STATUS_PAID, ""));
    }
}
