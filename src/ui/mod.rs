//! UI rendering for the console
//!
//! Layout, top to bottom:
//! - Header with the view title, subtitle and user filter
//! - View tabs
//! - The current view's body
//! - Status line with keybind hints
//!
//! The connection dialog is drawn over everything when open.

mod charts;
mod chrome;
mod config_panel;
mod crashes;
mod helpers;
mod tables;
mod theme;
mod visuals;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_CRASHES, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_OK, COLOR_SESSIONS,
};

pub use chrome::build_keybinds;
pub use crashes::SUMMARY_HEADERS;
pub use tables::{LOG_HEADERS, SESSION_HEADERS};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::view_state::View;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI for the current view
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(2), // tabs
            Constraint::Min(5),    // body
            Constraint::Length(1), // status
        ])
        .split(area);

    chrome::render_header(frame, chunks[0], app);
    chrome::render_tabs(frame, chunks[1], app);

    let body = chunks[2];
    match app.router.current() {
        View::Overview => tables::render_overview(frame, body, app),
        View::Sessions => tables::render_sessions(frame, body, app),
        View::Logs => tables::render_logs(frame, body, app),
        View::Crashes => crashes::render_crashes(frame, body, app),
        View::Visuals => visuals::render_visuals(frame, body, app),
    }

    chrome::render_status_bar(frame, chunks[3], app);
    config_panel::render_config_panel(frame, area, app);

    app.needs_redraw = false;
}
