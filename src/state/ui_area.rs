//! Page geometry shared by drawing and mouse handling
//!
//! ```text
//! Row 0-2:  Header (3 rows with borders)
//! Row 3+:   Contact form (left) | Comparison slider (right)
//! Bottom:   Status bar (1 row)
//! ```

use super::slider_controller::{ContainerBounds, MAX_POSITION};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Height of the header (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum width of the contact form column
pub const FORM_MIN_WIDTH: u16 = 44;

/// Rows used inside the slider panel for the RGB/Thermal labels
pub const SLIDER_LABEL_HEIGHT: u16 = 1;

/// Areas of the terminal page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub contact_form: Rect,
    pub slider_panel: Rect,
    pub slider_track: SliderTrack,
    pub status_bar: Rect,
}

impl PageLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(FORM_MIN_WIDTH),
                Constraint::Percentage(50),
            ])
            .split(rows[1]);

        let slider_panel = columns[1];
        // Inside the panel border, below the label row
        let inner = Rect {
            x: slider_panel.x.saturating_add(1),
            y: slider_panel
                .y
                .saturating_add(1 + SLIDER_LABEL_HEIGHT),
            width: slider_panel.width.saturating_sub(2),
            height: slider_panel
                .height
                .saturating_sub(2 + SLIDER_LABEL_HEIGHT),
        };

        Self {
            header: rows[0],
            contact_form: columns[0],
            slider_panel,
            slider_track: SliderTrack::new(inner),
            status_bar: rows[2],
        }
    }
}

/// Cells covered by the comparison image, in terminal columns/rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderTrack {
    area: Rect,
}

impl SliderTrack {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Check if a mouse cell is on the track
    #[inline]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Container geometry for the slider controller
    pub fn bounds(&self) -> ContainerBounds {
        ContainerBounds::new(f64::from(self.area.x), f64::from(self.area.width))
    }

    /// Pointer X for a mouse column
    #[inline]
    pub fn pointer_x(column: u16) -> f64 {
        f64::from(column)
    }

    /// Column offset (within the track) where the divider is drawn
    pub fn divider_offset(&self, position: f64) -> u16 {
        if self.area.width == 0 {
            return 0;
        }
        // Nudge up so positions computed from a column land back on it
        let offset = (position * f64::from(self.area.width) / MAX_POSITION + 1e-9).floor();
        (offset.max(0.0) as u16).min(self.area.width - 1)
    }
}
