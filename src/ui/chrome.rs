//! Header, view tabs and the status bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::view_state::View;

use super::helpers::spinner;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_OK};

/// Title and subtitle of the current view, with the user filter on the right.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.router.current();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            view.title(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(view.subtitle(), Style::default().fg(COLOR_DIM))),
    ]);
    frame.render_widget(title, chunks[0]);

    let filter = app.router.user_filter();
    if filter.is_visible() {
        let line = Line::from(vec![
            Span::styled("User: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                filter.display().to_string(),
                Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [u]", Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(line).right_aligned(), chunks[1]);
    }
}

pub fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| format!("{} {}", i + 1, view.label()));

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .select(app.router.current().index())
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Status message on the left, keybinds on the right.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut status = Vec::new();
    if app.is_loading() {
        status.push(Span::styled(
            format!("{} ", spinner(app.tick_count)),
            Style::default().fg(COLOR_ACTIVE),
        ));
    }
    let color = if app.status.is_error {
        COLOR_ERROR
    } else if app.status.text == "Connected." {
        COLOR_OK
    } else {
        COLOR_DIM
    };
    status.push(Span::styled(app.status.text.clone(), Style::default().fg(color)));
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[0]);

    frame.render_widget(
        Paragraph::new(build_keybinds(app)).right_aligned(),
        chunks[1],
    );
}

/// Keybind hints for the current focus.
pub fn build_keybinds(app: &App) -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(COLOR_HEADER));
    let label = |l: &'static str| Span::styled(l, Style::default().fg(COLOR_DIM));

    let mut spans = Vec::new();
    if app.config_panel.open {
        spans.extend([key("tab"), label(" field  "), key("enter"), label(" save  "), key("esc"), label(" cancel")]);
    } else if app.crashes.editing.is_some() {
        spans.extend([key("tab"), label(" next input  "), key("enter"), label(" apply  "), key("esc"), label(" done")]);
    } else if app.visuals.editing.is_some() {
        spans.extend([key("tab"), label(" from/to  "), key("enter"), label(" apply  "), key("esc"), label(" done")]);
    } else {
        match app.router.current() {
            View::Crashes => spans.extend([
                key("/"),
                label(" search  "),
                key("x"),
                label(" clear  "),
                key("e/E"),
                label(" export  "),
            ]),
            View::Visuals => spans.extend([
                key("f/t"),
                label(" dates  "),
                key("a"),
                label(" apply  "),
                key("d"),
                label(" default  "),
            ]),
            View::Sessions | View::Logs => spans.extend([key("e"), label(" export  ")]),
            View::Overview => {}
        }
        spans.extend([key("r"), label(" refresh  "), key("c"), label(" config  "), key("q"), label(" quit")]);
    }
    Line::from(spans)
}
