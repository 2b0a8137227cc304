//! Field rendering utilities for the employee form

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Error color shared with the original admin styling (#e74c3c)
pub const ERROR_COLOR: Color = Color::Rgb(0xe7, 0x4c, 0x3c);

const LABEL_WIDTH: usize = 28;

/// Draw a single-line form field row
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let label_style = if is_active {
        // The focused-container highlight
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value_style = if field.has_error() {
        Style::default().fg(ERROR_COLOR)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let marker = if field.required { "*" } else { " " };
    let label = format!("{:<width$}", format!("{}{}", field.label, marker), width = LABEL_WIDTH);

    // Multiline values collapse to their last line in the one-line row
    let display_value = field.display_value();
    let display_value = display_value.lines().last().unwrap_or(display_value);
    let shown = if display_value.is_empty() && !is_active {
        "(vacío)"
    } else {
        display_value
    };

    let mut spans = vec![
        Span::styled(label, label_style),
        Span::styled(shown.to_string(), value_style),
    ];
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the error annotation line attached to a field
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled("▌ ", Style::default().fg(ERROR_COLOR)),
        Span::styled(message.to_string(), Style::default().fg(ERROR_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
