//! Visuals view: date range and the two chart grids.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::{ChartGroup, ChartMetric};
use crate::view_state::{ChartStatus, DateField};

use super::charts::render_chart;
use super::helpers::{render_placeholder, spinner};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_CRASHES, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_SESSIONS,
};

pub fn render_visuals(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // range
            Constraint::Length(2),
            Constraint::Percentage(50),
            Constraint::Length(2),
            Constraint::Min(6),
        ])
        .split(area);

    render_range(frame, rows[0], app);
    render_section(frame, rows[1], "Session Visualizations", "Usage trends and engagement patterns.");
    render_group(frame, rows[2], app, ChartGroup::Sessions);
    render_section(frame, rows[3], "Crash Visualizations", "Crash trends and most frequent causes.");
    render_group(frame, rows[4], app, ChartGroup::Crashes);
}

fn render_range(frame: &mut Frame, area: Rect, app: &App) {
    let field = |label: &'static str, value: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        let text = if focused { format!("{}▏", value) } else { value.to_string() };
        [
            Span::styled(label, Style::default().fg(COLOR_DIM)),
            Span::styled(text, style),
        ]
    };

    let range = &app.visuals.range;
    let editing = app.visuals.editing;
    let mut spans = Vec::new();
    spans.extend(field("From ", &range.from, editing == Some(DateField::From)));
    spans.push(Span::raw("  "));
    spans.extend(field("To ", &range.to, editing == Some(DateField::To)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_section(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.to_string(), Style::default().fg(COLOR_DIM))),
    ]);
    frame.render_widget(text, area);
}

/// Charts of `group` in rows of three.
fn render_group(frame: &mut Frame, area: Rect, app: &App, group: ChartGroup) {
    let metrics: Vec<ChartMetric> = ChartMetric::ALL
        .iter()
        .copied()
        .filter(|m| m.group() == group)
        .collect();
    let color = match group {
        ChartGroup::Sessions => COLOR_SESSIONS,
        ChartGroup::Crashes => COLOR_CRASHES,
    };

    let row_count = metrics.len().div_ceil(3).max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);

    for (row_metrics, row_area) in metrics.chunks(3).zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);
        for (metric, cell) in row_metrics.iter().zip(cols.iter()) {
            render_metric(frame, *cell, app, *metric, color);
        }
    }
}

fn render_metric(frame: &mut Frame, area: Rect, app: &App, metric: ChartMetric, color: ratatui::style::Color) {
    if let Some(instance) = app.visuals.registry.get(metric.key()) {
        render_chart(frame, area, instance, color);
        return;
    }
    match app.visuals.status(metric) {
        ChartStatus::Failed(reason) => {
            let text = Paragraph::new(Line::from(Span::styled(
                format!("Failed to load: {}", reason),
                Style::default().fg(COLOR_ERROR),
            )))
            .block(super::helpers::panel(metric.title()))
            .wrap(ratatui::widgets::Wrap { trim: true });
            frame.render_widget(text, area);
        }
        ChartStatus::Loading => {
            let message = format!("{} Loading...", spinner(app.tick_count));
            render_placeholder(frame, area, metric.title(), &message);
        }
        ChartStatus::Idle | ChartStatus::Ready => {
            render_placeholder(frame, area, metric.title(), metric.subtitle());
        }
    }
}
