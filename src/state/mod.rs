//! Widget state module

mod form_controller;
mod forms;
mod listeners;
mod slider_controller;
mod ui_area;

pub use form_controller::*;
pub use forms::*;
pub use listeners::*;
pub use slider_controller::*;
pub use ui_area::*;
