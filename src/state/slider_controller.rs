//! Comparison slider geometry
//!
//! The slider reveals the thermal layer over the RGB layer. Its position is a
//! percentage across the container, derived from the pointer X coordinate.

use super::listeners::{ListenerId, Listeners};
use crate::error::SliderInputError;

/// Position of a freshly mounted slider
pub const DEFAULT_POSITION: f64 = 50.0;

pub const MIN_POSITION: f64 = 0.0;
pub const MAX_POSITION: f64 = 100.0;

/// Horizontal extent of the slider container, in the pointer's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// One active touch point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// Map a pointer X coordinate to a position in [0, 100]
pub fn try_compute_position(
    pointer_x: f64,
    container_left: f64,
    container_width: f64,
) -> Result<f64, SliderInputError> {
    for value in [pointer_x, container_left] {
        if !value.is_finite() {
            return Err(SliderInputError::NonFinite(value));
        }
    }
    if !container_width.is_finite() || container_width <= 0.0 {
        return Err(SliderInputError::InvalidWidth(container_width));
    }
    let percent = (pointer_x - container_left) / container_width * 100.0;
    Ok(percent.clamp(MIN_POSITION, MAX_POSITION))
}

/// Like [`try_compute_position`], but unusable geometry keeps `previous`
pub fn compute_position(
    pointer_x: f64,
    container_left: f64,
    container_width: f64,
    previous: f64,
) -> f64 {
    try_compute_position(pointer_x, container_left, container_width).unwrap_or(previous)
}

/// Controller for one mounted comparison slider
#[derive(Debug)]
pub struct SliderController {
    position: f64,
    engaged: bool,
    listeners: Listeners<f64>,
}

impl Default for SliderController {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderController {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            engaged: false,
            listeners: Listeners::new(),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Whether the primary button is held on the slider
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn on_position_change(&mut self, callback: impl Fn(&f64) + Send + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Primary button pressed inside the container: jump there and engage
    pub fn pointer_down(&mut self, pointer_x: f64, bounds: ContainerBounds) {
        self.engaged = true;
        self.apply(pointer_x, bounds);
    }

    /// Pointer moved; only tracked while engaged
    pub fn pointer_move(&mut self, pointer_x: f64, bounds: ContainerBounds) {
        if self.engaged {
            self.apply(pointer_x, bounds);
        }
    }

    pub fn pointer_up(&mut self) {
        self.engaged = false;
    }

    /// Touch moved; only the first touch point is used
    pub fn touch_move(&mut self, touches: &[TouchPoint], bounds: ContainerBounds) {
        match touches.first() {
            Some(touch) => self.apply(touch.x, bounds),
            None => {
                tracing::trace!("Slider input ignored: {}", SliderInputError::NoTouchPoints);
            }
        }
    }

    /// Move by a number of percentage points (keyboard)
    pub fn nudge(&mut self, delta: f64) {
        if !delta.is_finite() {
            tracing::trace!("Slider input ignored: {}", SliderInputError::NonFinite(delta));
            return;
        }
        self.set_position((self.position + delta).clamp(MIN_POSITION, MAX_POSITION));
    }

    /// Back to the midpoint
    pub fn reset(&mut self) {
        self.engaged = false;
        self.set_position(DEFAULT_POSITION);
    }

    fn apply(&mut self, pointer_x: f64, bounds: ContainerBounds) {
        match try_compute_position(pointer_x, bounds.left, bounds.width) {
            Ok(position) => self.set_position(position),
            Err(e) => tracing::trace!("Slider input ignored: {e}"),
        }
    }

    fn set_position(&mut self, position: f64) {
        self.position = position;
        self.listeners.emit(&self.position);
    }
}
