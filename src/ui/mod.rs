//! UI module for rendering the terminal page

mod comparison_slider;
mod contact_form;
mod field;
mod layout;
mod theme;

use crate::app::App;
use crate::state::PageLayout;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let page = PageLayout::compute(frame.area());

    layout::draw_header(frame, page.header);
    contact_form::draw(frame, page.contact_form, app);
    comparison_slider::draw(frame, page.slider_panel, page.slider_track, app);
    layout::draw_status_bar(frame, page.status_bar, app);
}
