//! Demo request form rendering

use super::field::draw_field;
use super::theme;
use crate::app::{App, Focus};
use crate::state::{FieldKey, FormState, FormStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Draw the contact form, or the success panel once sent
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::ContactForm;
    let block = Block::default()
        .title(" Request a demo ")
        .borders(Borders::ALL)
        .border_style(theme::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = app.form.state();
    if state.status() == FormStatus::Sent {
        draw_success(frame, inner, state, focused);
    } else {
        draw_fields(frame, inner, app);
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.form.state();
    let error = state.error_message();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Intro
            Constraint::Length(u16::from(error.is_some())), // Error
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Company
            Constraint::Length(3), // Role
            Constraint::Min(4), // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Fill in your details and we'll schedule a walkthrough.",
            Style::default().fg(theme::MUTED),
        )),
        chunks[0],
    );

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(theme::ERROR))),
            chunks[1],
        );
    }

    let form_focused = app.focus == Focus::ContactForm;
    for (index, key) in FieldKey::ALL.into_iter().enumerate() {
        let is_active = form_focused && app.form_focus.active_key() == Some(key);
        draw_field(
            frame,
            chunks[index + 2],
            key,
            state.fields.get(key),
            is_active,
        );
    }

    let button_selected = form_focused && app.form_focus.is_submit_active();
    draw_submit_button(frame, chunks[7], state, button_selected);
}

/// Submit button; dimmed while a request is in flight
fn draw_submit_button(frame: &mut Frame, area: Rect, state: &FormState, is_selected: bool) {
    let enabled = !state.is_sending();
    let label = if enabled {
        format!("{} →", state.submit_label())
    } else {
        state.submit_label().to_string()
    };

    let text_style = if !enabled {
        Style::default().fg(theme::MUTED)
    } else if is_selected {
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(is_selected && enabled));

    frame.render_widget(
        Paragraph::new(label)
            .style(text_style)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_success(frame: &mut Frame, area: Rect, state: &FormState, focused: bool) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("✓", Style::default().fg(theme::ACCENT))),
        Line::from(""),
        Line::from(Span::styled("Demo request received", theme::heading())),
        Line::from(Span::styled(
            "Our team will get back to you within 24 hours.",
            Style::default().fg(theme::MUTED),
        )),
    ];

    if let Some(receipt) = state.receipt() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Reference {} · {}",
                receipt.id,
                receipt.created_at.format("%Y-%m-%d %H:%M UTC")
            ),
            Style::default().fg(theme::MUTED),
        )));
    }

    let action_style = if focused {
        Style::default()
            .fg(theme::ACCENT_SOFT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::ACCENT)
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Send another request (Enter)", action_style)));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
