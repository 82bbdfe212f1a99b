//! Axalon site widgets
//!
//! The two interactive pieces of the Axalon Systems site, usable from any
//! view layer:
//!
//! - [`state::FormController`]: demo request form with validation and a
//!   single in-flight submission to `POST <base-url>/api/demo-requests`
//! - [`state::SliderController`]: RGB / thermal comparison slider driven by
//!   pointer and touch input
//!
//! [`app::App`] and [`ui`] mount both in a terminal page.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod ui;
