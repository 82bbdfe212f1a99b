//! RGB / thermal comparison slider rendering
//!
//! The RGB layer fills the track; the thermal layer is revealed to the right
//! of the divider.

use super::theme;
use crate::app::{App, Focus};
use crate::state::SliderTrack;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const RGB_PANEL: Color = Color::Rgb(0x3A, 0x4A, 0x5C);
const RGB_FRAME: Color = Color::Rgb(0x6B, 0x72, 0x80);
const THERMAL_SCALE: [Color; 4] = [
    Color::Rgb(0x1E, 0x1B, 0x4B),
    Color::Rgb(0x7C, 0x3A, 0xED),
    Color::Rgb(0xEF, 0x44, 0x44),
    Color::Rgb(0xFA, 0xCC, 0x15),
];

/// Draw the comparison panel
pub fn draw(frame: &mut Frame, panel: Rect, track: SliderTrack, app: &App) {
    let focused = app.focus == Focus::ComparisonSlider;
    let position = app.slider.position();

    let block = Block::default()
        .title(" RGB + Thermal comparison ")
        .title_bottom(Line::from(format!(" {position:.0}% ")).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(theme::border(focused));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    if inner.height > 0 {
        let labels = Rect { height: 1, ..inner };
        frame.render_widget(
            Paragraph::new(Span::styled("RGB", Style::default().fg(theme::MUTED))),
            labels,
        );
        frame.render_widget(
            Paragraph::new(Span::styled("Thermal", Style::default().fg(theme::ACCENT)))
                .alignment(Alignment::Right),
            labels,
        );
    }

    let area = track.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let divider = track.divider_offset(position);
    let handle_row = area.height / 2;
    let lines: Vec<Line> = (0..area.height)
        .map(|row| track_line(area.width, divider, row, row == handle_row))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// One row of the track: RGB cells, the divider, then thermal cells
fn track_line(width: u16, divider: u16, row: u16, with_handle: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(usize::from(width));
    for col in 0..width {
        let span = if col == divider {
            let symbol = if with_handle { "◆" } else { "┃" };
            Span::styled(
                symbol,
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else if col < divider {
            rgb_cell(col, row)
        } else {
            thermal_cell(col, row)
        };
        spans.push(span);
    }
    Line::from(spans)
}

/// Solar panel rows separated by frame lines
fn rgb_cell(col: u16, row: u16) -> Span<'static> {
    if row % 3 == 2 {
        Span::styled("─", Style::default().fg(RGB_FRAME))
    } else if col % 6 == 5 {
        Span::styled("│", Style::default().fg(RGB_FRAME))
    } else {
        Span::styled("▒", Style::default().fg(RGB_PANEL))
    }
}

/// Heat map with a few deterministic hotspots
fn thermal_cell(col: u16, row: u16) -> Span<'static> {
    let heat = (u32::from(col) * 7 + u32::from(row) * 13) % 17;
    let level = match heat {
        0 => 3,
        1..=2 => 2,
        3..=8 => 1,
        _ => 0,
    };
    Span::styled("█", Style::default().fg(THERMAL_SCALE[level]))
}
