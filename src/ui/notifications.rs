//! Floating toast rendering, anchored top-right

use crate::app::App;
use crate::state::Phase;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const MAX_WIDTH: u16 = 44;
const MARGIN: u16 = 2;

pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let mut y = area.y + 1;

    for toast in app.notifications.iter() {
        if y >= area.bottom() {
            break;
        }

        let text = format!(" {} {} ", toast.level.label(), toast.message);
        let width = (text.chars().count() as u16).min(MAX_WIDTH).min(area.width);
        let x = area.right().saturating_sub(width + MARGIN);
        let toast_area = Rect::new(x, y, width, 1);

        let mut style = Style::default()
            .fg(Color::White)
            .bg(toast.level.color())
            .add_modifier(Modifier::BOLD);
        // Exit transition: fade before removal
        if toast.phase(now) == Phase::Exiting {
            style = style.add_modifier(Modifier::DIM);
        }

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, style))),
            toast_area,
        );

        y += 2;
    }
}
