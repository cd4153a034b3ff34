//! Drawing of chart instances.
//!
//! Bar series become a `BarChart`, line series a Braille `Chart`, and pie
//! series a list of share bars (one row per slice with its percentage).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::{ChartKind, ChartSeries};
use crate::surface::ChartInstance;

use super::helpers::{panel, render_placeholder};
use super::theme::{COLOR_ACCENT, COLOR_DIM, PIE_PALETTE};

/// Draw `instance` into `area` in `color`.
pub fn render_chart(frame: &mut Frame, area: Rect, instance: &ChartInstance, color: ratatui::style::Color) {
    let spec = instance.spec();
    if spec.series.is_empty() {
        render_placeholder(frame, area, &spec.title, "No data for this range.");
        return;
    }
    match spec.kind {
        ChartKind::Bar => render_bar(frame, area, &spec.title, &spec.series, color),
        ChartKind::Line => render_line(frame, area, &spec.title, &spec.series, color),
        ChartKind::Pie => render_pie(frame, area, &spec.title, &spec.series),
    }
}

fn render_bar(frame: &mut Frame, area: Rect, title: &str, series: &ChartSeries, color: ratatui::style::Color) {
    let bars: Vec<Bar> = series
        .points()
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.to_string()))
                .value(value.max(0.0).round() as u64)
                .style(Style::default().fg(color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = (inner_width / bars.len().max(1)).saturating_sub(1).clamp(1, 12) as u16;

    let chart = BarChart::default()
        .block(panel(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(Style::default().fg(COLOR_ACCENT).bg(color));
    frame.render_widget(chart, area);
}

fn render_line(frame: &mut Frame, area: Rect, title: &str, series: &ChartSeries, color: ratatui::style::Color) {
    let points: Vec<(f64, f64)> = series
        .points()
        .enumerate()
        .map(|(i, (_, value))| (i as f64, value))
        .collect();
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let y_max = series.max_value().max(1.0);

    let first = series.labels.first().cloned().unwrap_or_default();
    let last = series.labels.last().cloned().unwrap_or_default();

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(panel(title))
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels([first, last])
                .style(Style::default().fg(COLOR_DIM)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(["0".to_string(), format_value(y_max)])
                .style(Style::default().fg(COLOR_DIM)),
        );
    frame.render_widget(chart, area);
}

fn render_pie(frame: &mut Frame, area: Rect, title: &str, series: &ChartSeries) {
    let total = series.total();
    let label_width = series
        .labels
        .iter()
        .map(|l| unicode_width::UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0)
        .min(24);
    let bar_room = (area.width as usize).saturating_sub(label_width + 14).max(1);

    let lines: Vec<Line> = series
        .points()
        .enumerate()
        .map(|(i, (label, value))| {
            let share = if total > 0.0 { value / total } else { 0.0 };
            let filled = (share * bar_room as f64).round() as usize;
            let color = PIE_PALETTE[i % PIE_PALETTE.len()];
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", crate::format::truncate_chars(label, label_width), width = label_width),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>5.1}%", share * 100.0),
                    Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{:.1}", value)
    }
}
