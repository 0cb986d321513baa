//! Help dialog
//!
//! Shows the keyboard shortcuts for the active view

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Help lines for a view
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1", "Month view"),
        key_line("2", "Category groups view"),
        key_line("j/k", "Move selection down/up"),
        key_line("a", "Add"),
        key_line("e", "Edit selected"),
        key_line("d", "Delete selected"),
        Line::from(""),
    ];

    match view {
        ActiveView::Month => {
            lines.push(heading("Month View"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Switch incomes/categories"));
            lines.push(key_line("[ / ]", "Previous/next month"));
            lines.push(key_line("t", "Jump to this month"));
            lines.push(key_line("x", "Edit expense of selected category"));
            lines.push(key_line("p", "Toggle paid"));
            lines.push(key_line("c", "Copy categories from previous month"));
        }
        ActiveView::Groups => {
            lines.push(heading("Category Groups"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Groups are listed by order. A group used by any category cannot be deleted.",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
