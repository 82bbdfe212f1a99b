//! Field rendering for the contact form

use super::theme;
use crate::state::FieldKey;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one form field with its label, value or placeholder, and cursor
pub fn draw_field(frame: &mut Frame, area: Rect, key: FieldKey, value: &str, is_active: bool) {
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(theme::ACCENT));

    let mut lines: Vec<Line> = if value.is_empty() {
        let placeholder = if is_active { "" } else { key.placeholder() };
        vec![Line::from(Span::styled(
            placeholder,
            Style::default().fg(theme::MUTED),
        ))]
    } else {
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme::TEXT))))
            .collect()
    };
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let title = if key.is_required() {
        format!(" {} * ", key.label())
    } else {
        format!(" {} ", key.label())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::border(is_active));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
