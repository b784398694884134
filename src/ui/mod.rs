//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header);
    forms::draw_property_form(frame, screen.form, app);
    result::draw(frame, screen.result, app);
    layout::draw_status_bar(frame, screen.status_bar, app);
}
