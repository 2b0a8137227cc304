//! UI module for rendering the TUI

mod field_renderer;
mod form;
mod layout;
mod notifications;

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    let (header_area, form_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    form::draw(frame, form_area, app, now);
    layout::draw_status_bar(frame, status_area, app);

    // Toasts float above everything else
    notifications::draw(frame, app, now);
}
