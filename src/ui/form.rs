//! Employee form rendering, including the entrance animation

use super::field_renderer;
use crate::app::App;
use crate::state::BUTTON_LABELS;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Lines reserved per form row (field line + error/spacing line)
const SLOT_HEIGHT: u16 = 2;
/// Maximum downward offset while a row slides into place
const ENTRANCE_OFFSET: u16 = 1;
const FORM_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let width = area.width.min(FORM_WIDTH);
    let x = area.x + (area.width - width) / 2;
    let mut y = area.y + 1;

    for index in 0..app.form.field_count() {
        if y >= area.bottom() {
            break;
        }

        // Rows that have not started their reveal still occupy their slot
        if !app.entrance.row_started(index, now) {
            y += SLOT_HEIGHT;
            continue;
        }

        let offset = app.entrance.row_offset(index, now, ENTRANCE_OFFSET);
        let row_y = y + offset;
        if row_y < area.bottom() {
            let line_area = Rect::new(x, row_y, width, 1);
            match app.form.get_field(index) {
                Some(field) => {
                    let is_active = index == app.form.active_field_index;
                    field_renderer::draw_field(frame, line_area, field, is_active);

                    // The error annotation sits directly under its field
                    if offset == 0 {
                        if let Some(message) = field.error() {
                            let error_y = y + 1;
                            if error_y < area.bottom() {
                                field_renderer::draw_error_line(
                                    frame,
                                    Rect::new(x, error_y, width, 1),
                                    message,
                                );
                            }
                        }
                    }
                }
                None => draw_buttons(frame, line_area, app),
            }
        }

        y += SLOT_HEIGHT;
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let on_buttons = app.form.is_buttons_row_active();
    let mut spans: Vec<Span> = Vec::new();

    for (i, label) in BUTTON_LABELS.iter().enumerate() {
        let style = if on_buttons && i == app.form.selected_button {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[ {label} ]"), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
