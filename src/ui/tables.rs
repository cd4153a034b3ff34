//! Overview, Sessions and Logs views.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::view_state::tables::{log_detail, log_preview};

use super::helpers::{panel, render_placeholder, render_table, render_text};
use super::theme::{COLOR_ACCENT, COLOR_DIM};

pub const SESSION_HEADERS: [&str; 5] = ["Session ID", "User", "Start", "End", "Duration"];
pub const LOG_HEADERS: [&str; 4] = ["Log ID", "User", "Timestamp", "Preview"];
const LATEST_SESSION_HEADERS: [&str; 4] = ["User", "Start", "End", "Duration"];
const LATEST_CRASH_HEADERS: [&str; 6] = ["Crash ID", "User", "Time", "Exception", "Module", "Event"];

const LOADING: &str = "Loading...";

// ============================================================================
// Overview
// ============================================================================

pub fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
    let Some(overview) = &app.overview else {
        render_placeholder(frame, area, "Overview", LOADING);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // KPIs
            Constraint::Percentage(45),
            Constraint::Min(5),
        ])
        .split(area);

    let kpi_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);
    let kpis = [
        ("Total Users", overview.users_count),
        ("Sessions (Last 7 days)", overview.sessions_7d),
        ("Crashes (Last 7 days)", overview.crashes_7d),
    ];
    for ((title, value), area) in kpis.iter().zip(kpi_chunks.iter()) {
        render_kpi(frame, *area, title, *value);
    }

    let sessions = overview
        .latest_sessions
        .iter()
        .map(|s| {
            vec![
                s.user_id.clone(),
                s.session_start.clone(),
                s.session_end.clone(),
                s.total_duration.clone(),
            ]
        })
        .collect();
    render_table(frame, chunks[1], "Latest Sessions", &LATEST_SESSION_HEADERS, sessions, None);

    let crashes = overview
        .latest_crashes
        .iter()
        .map(|c| {
            vec![
                c.crash_id.clone(),
                c.user_id.clone(),
                c.crash_time.clone(),
                c.exception_code.clone(),
                c.faulting_module.clone(),
                c.event_id.clone(),
            ]
        })
        .collect();
    render_table(frame, chunks[2], "Latest Crashes", &LATEST_CRASH_HEADERS, crashes, None);
}

fn render_kpi(frame: &mut Frame, area: Rect, title: &str, value: u64) {
    let widget = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )))
    .block(panel(title))
    .centered();
    frame.render_widget(widget, area);
}

// ============================================================================
// Sessions / Logs
// ============================================================================

pub fn render_sessions(frame: &mut Frame, area: Rect, app: &App) {
    let Some(rows) = app.sessions.rows() else {
        render_placeholder(frame, area, "Sessions", LOADING);
        return;
    };
    let rows = rows
        .iter()
        .map(|s| {
            vec![
                s.session_id.clone(),
                s.user_id.clone(),
                s.session_start.clone(),
                s.session_end.clone(),
                s.total_duration.clone(),
            ]
        })
        .collect();
    render_table(
        frame,
        area,
        "Sessions",
        &SESSION_HEADERS,
        rows,
        app.sessions.selection.index(),
    );
}

pub fn render_logs(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let Some(rows) = app.logs.rows() else {
        render_placeholder(frame, area, "Logs", LOADING);
        return;
    };
    let rows = rows
        .iter()
        .map(|l| {
            vec![
                l.log_id.clone(),
                l.user_id.clone(),
                l.log_timestamp.clone(),
                log_preview(l).to_string(),
            ]
        })
        .collect();
    render_table(frame, chunks[0], "Logs", &LOG_HEADERS, rows, app.logs.selection.index());

    match app.logs.selected() {
        Some(log) => render_text(frame, chunks[1], "Log Detail", &log_detail(log)),
        None => {
            let hint = Paragraph::new(Span::styled(
                "Select a log to view its content.",
                Style::default().fg(COLOR_DIM),
            ))
            .block(panel("Log Detail"));
            frame.render_widget(hint, chunks[1]);
        }
    }
}
