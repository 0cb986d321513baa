//! Month view
//!
//! Header with the month's totals, the income list and the category table
//! with each category's expense record for the month.

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_amount;
use crate::reports::generate_month_summary;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MonthLayout;

/// Render the month view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MonthLayout::new(area);

    render_header(frame, app, layout.header);
    render_incomes(frame, app, layout.incomes);
    render_categories(frame, app, layout.categories);
}

fn panel_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|t| Cell::from(*t).style(Style::default().add_modifier(Modifier::BOLD)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1)
}

fn highlight() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let month_key = app.month_key();
    let summary = generate_month_summary(app.repository, &month_key);

    let mut spans = vec![
        Span::styled("◀ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(
                "{} {}",
                app.current_month.month_name(),
                app.current_month.year()
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::Yellow)),
    ];

    match summary {
        Ok(summary) => {
            let remaining = summary.remaining();
            let remaining_color = if remaining < 0.0 {
                Color::Red
            } else {
                Color::Green
            };
            spans.extend([
                Span::raw("  │  Income: "),
                Span::styled(
                    format_amount(summary.total_income, &app.currency),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  Budget: "),
                Span::raw(format_amount(summary.total_budget, &app.currency)),
                Span::raw("  Spent: "),
                Span::raw(format_amount(summary.total_spent, &app.currency)),
                Span::raw("  Remaining: "),
                Span::styled(
                    format_amount(remaining, &app.currency),
                    Style::default()
                        .fg(remaining_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
        }
        Err(e) => spans.push(Span::styled(
            format!("  │  {}", e),
            Style::default().fg(Color::Red),
        )),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_incomes(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Incomes;
    let block = panel_block(" Incomes ", focused);
    let incomes = app.incomes();

    if incomes.is_empty() {
        let text = Paragraph::new("No incomes this month. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<Row> = incomes
        .iter()
        .map(|income| {
            Row::new(vec![
                Cell::from(income.description.clone()),
                Cell::from(format_amount(income.amount, &app.currency))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let widths = [Constraint::Min(20), Constraint::Length(18)];
    let mut table = Table::new(rows, widths)
        .header(header_row(&["Description", "Amount"]))
        .block(block);
    if focused {
        table = table.highlight_style(highlight()).highlight_symbol("▶ ");
    }

    let mut state = TableState::default();
    state.select(Some(app.selected_income_index));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Categories;
    let block = panel_block(" Categories ", focused);
    let categories = app.categories();

    if categories.is_empty() {
        let text = Paragraph::new(
            "No categories this month. Press 'a' to add one or 'c' to copy last month's.",
        )
        .block(block)
        .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let group_names: HashMap<String, String> = app
        .groups()
        .into_iter()
        .map(|g| (g.group_id, g.group_name))
        .collect();
    let month_key = app.month_key();

    let rows: Vec<Row> = categories
        .iter()
        .map(|category| {
            let group = group_names
                .get(&category.group_id)
                .cloned()
                .unwrap_or_else(|| "—".to_string());
            let record = category.expense_for(&month_key);
            let (budget, spent, remaining, status) = match record {
                Some(r) => (
                    format_amount(r.budget, &app.currency),
                    format_amount(r.amount, &app.currency),
                    Some(r.remaining()),
                    Some(r.is_paid()),
                ),
                None => ("—".to_string(), "—".to_string(), None, None),
            };

            let remaining_cell = match remaining {
                Some(value) => Cell::from(format_amount(value, &app.currency)).style(
                    Style::default().fg(if value < 0.0 { Color::Red } else { Color::Green }),
                ),
                None => Cell::from("—"),
            };
            let status_cell = match status {
                Some(true) => Cell::from("paid").style(Style::default().fg(Color::Green)),
                Some(false) => Cell::from("not paid").style(Style::default().fg(Color::Red)),
                None => Cell::from(""),
            };

            Row::new(vec![
                Cell::from(category.category_name.clone()),
                Cell::from(group),
                Cell::from(budget),
                Cell::from(spent),
                remaining_cell,
                status_cell,
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),    // Category
        Constraint::Length(16), // Group
        Constraint::Length(14), // Budget
        Constraint::Length(14), // Spent
        Constraint::Length(14), // Remaining
        Constraint::Length(9),  // Status
    ];

    let mut table = Table::new(rows, widths)
        .header(header_row(&[
            "Category",
            "Group",
            "Budget",
            "Spent",
            "Remaining",
            "Status",
        ]))
        .block(block);
    if focused {
        table = table.highlight_style(highlight()).highlight_symbol("▶ ");
    }

    let mut state = TableState::default();
    state.select(Some(app.selected_category_index));
    frame.render_stateful_widget(table, area, &mut state);
}
