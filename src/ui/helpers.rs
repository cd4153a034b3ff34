//! Helper functions and constants for UI rendering

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG};

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Bordered panel with a bold title.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
}

/// Render a headed table of text rows, highlighting `selected`.
///
/// Columns share the width evenly except the last, which takes the rest.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    headers: &[&str],
    rows: Vec<Vec<String>>,
    selected: Option<usize>,
) {
    let header = Row::new(headers.iter().map(|h| h.to_string()))
        .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));
    let widths: Vec<Constraint> = headers
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 == headers.len() {
                Constraint::Min(10)
            } else {
                Constraint::Ratio(1, headers.len() as u32)
            }
        })
        .collect();

    let table = Table::new(rows.into_iter().map(Row::new), widths)
        .header(header)
        .block(panel(title))
        .row_highlight_style(
            Style::default()
                .bg(COLOR_SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}

/// A dim one-line message inside a titled panel.
pub fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let text = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(COLOR_DIM),
    )))
    .block(panel(title))
    .wrap(Wrap { trim: false });
    frame.render_widget(text, area);
}

/// Multi-line text inside a titled panel.
pub fn render_text(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
    let widget = Paragraph::new(lines)
        .block(panel(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
