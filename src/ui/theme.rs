//! Site palette

use ratatui::style::{Color, Modifier, Style};

/// Primary accent (#00D1B2)
pub const ACCENT: Color = Color::Rgb(0x00, 0xD1, 0xB2);
/// Secondary accent (#6EE7F9)
pub const ACCENT_SOFT: Color = Color::Rgb(0x6E, 0xE7, 0xF9);
/// Body text (#E5E7EB)
pub const TEXT: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
pub const MUTED: Color = Color::DarkGray;
pub const ERROR: Color = Color::Rgb(0xF8, 0x71, 0x71);

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn heading() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}
