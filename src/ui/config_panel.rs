//! Connection settings dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::view_state::ConfigField;

use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 9;

pub fn render_config_panel(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.config_panel;
    if !panel.open {
        return;
    }

    let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
    let height = DIALOG_HEIGHT.min(area.height);
    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " Connection ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let field_line = |label: &'static str, value: String, focused: bool| {
        let marker = if focused { "▶ " } else { "  " };
        let value_style = if focused {
            Style::default().fg(COLOR_ACTIVE)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
            Span::styled(label, Style::default().fg(COLOR_DIM)),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ])
    };

    let lines = vec![
        Line::from(""),
        field_line("API URL: ", panel.api_url.clone(), panel.field == ConfigField::ApiUrl),
        field_line("Token:   ", panel.masked_token(), panel.field == ConfigField::Token),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", panel.hint), Style::default().fg(COLOR_DIM))),
        Line::from(""),
        Line::from(Span::styled(
            "  tab switch field · enter save · esc cancel",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}
