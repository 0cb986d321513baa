//! Category groups view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

/// Render the group list, ordered by `order`
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Category Groups ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let groups = app.groups();
    if groups.is_empty() {
        let text = Paragraph::new("No category groups. Press 'a' to create one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<Row> = groups
        .iter()
        .map(|group| {
            Row::new(vec![
                Cell::from(group.order.to_string()),
                Cell::from(group.group_name.clone()),
                Cell::from(group.group_id.clone()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Order").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Id").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let widths = [
        Constraint::Length(7),
        Constraint::Min(20),
        Constraint::Length(38),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_group_index));
    frame.render_stateful_widget(table, area, &mut state);
}
