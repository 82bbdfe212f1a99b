//! Page chrome (header, status bar)

use super::theme;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the header bar
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "AXALON SYSTEMS",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Autonomous inspection drones", Style::default().fg(theme::MUTED)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::MUTED));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the status bar: key hints on the left, endpoint on the right
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(endpoint_width(app))])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", app.status_hint()),
            Style::default().fg(theme::MUTED),
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} ", app.endpoint),
            Style::default().fg(theme::MUTED),
        ))
        .alignment(Alignment::Right),
        chunks[1],
    );
}

fn endpoint_width(app: &App) -> u16 {
    u16::try_from(app.endpoint.chars().count() + 1).unwrap_or(u16::MAX)
}
