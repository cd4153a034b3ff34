//! Crashes view: search inputs, result list, signature summary and detail.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::view_state::crashes::{NO_CRASHES, SUMMARY_CHART_KEY};
use crate::view_state::CrashField;

use super::charts::render_chart;
use super::helpers::{panel, render_placeholder, render_table, render_text};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_CRASHES, COLOR_DIM, COLOR_INPUT_BG, COLOR_SELECTED_BG,
};

pub const SUMMARY_HEADERS: [&str; 4] = ["Signature", "Count", "Last Seen", "Example"];

pub fn render_crashes(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search inputs
            Constraint::Percentage(55),
            Constraint::Min(6),
        ])
        .split(area);

    render_inputs(frame, rows[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    render_list(frame, middle[0], app);
    render_text(frame, middle[1], "Crash Detail", &app.crashes.detail_text());

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);
    render_summary_table(frame, bottom[0], app);
    match app.crashes.registry.get(SUMMARY_CHART_KEY) {
        Some(instance) => render_chart(frame, bottom[1], instance, COLOR_CRASHES),
        None => render_placeholder(frame, bottom[1], "Top crash signatures", "Loading..."),
    }
}

fn render_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(25), Constraint::Percentage(25)])
        .split(area);

    for (field, col) in CrashField::ALL.iter().zip(cols.iter()) {
        let focused = app.crashes.editing == Some(*field);
        let value = app.crashes.inputs.get(*field);
        let content = if value.is_empty() && !focused {
            Span::styled(field.placeholder(), Style::default().fg(COLOR_DIM))
        } else if focused {
            Span::styled(format!("{}▏", value), Style::default().fg(COLOR_ACCENT))
        } else {
            Span::styled(value.to_string(), Style::default().fg(COLOR_ACCENT))
        };

        let mut block = panel(field.label());
        if focused {
            block = block.border_style(Style::default().fg(COLOR_ACTIVE));
        }
        let input = Paragraph::new(Line::from(content))
            .style(Style::default().bg(COLOR_INPUT_BG))
            .block(block);
        frame.render_widget(input, *col);
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let title = "Crashes";
    let Some(list) = app.crashes.list() else {
        render_placeholder(frame, area, title, "Loading...");
        return;
    };
    if list.is_empty() {
        render_placeholder(frame, area, title, NO_CRASHES);
        return;
    }

    let items: Vec<ListItem> = list
        .iter()
        .map(|crash| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    crash.headline(),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(crash.reason(), Style::default().fg(COLOR_DIM))),
            ])
        })
        .collect();

    let widget = List::new(items)
        .block(panel(title))
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(app.crashes.selection.index());
    frame.render_stateful_widget(widget, area, &mut state);
}

fn render_summary_table(frame: &mut Frame, area: Rect, app: &App) {
    let Some(summary) = app.crashes.summary() else {
        render_placeholder(frame, area, "Crash Summary", "Loading...");
        return;
    };
    let rows = summary
        .iter()
        .map(|s| {
            vec![
                s.signature.clone(),
                s.count.to_string(),
                s.last_seen.clone(),
                s.example.clone(),
            ]
        })
        .collect();
    render_table(frame, area, "Crash Summary", &SUMMARY_HEADERS, rows, None);
}
