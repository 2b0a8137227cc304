//! Screen layout and chrome

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, form body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Registro de Empleado ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· Recursos Humanos", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Tab: campo siguiente · Ctrl+S: guardar · Esc: salir ",
        Style::default().fg(Color::DarkGray),
    )];

    // Help text for the focused field, the terminal stand-in for a
    // label hover tooltip
    if let Some(help) = app.focused_help() {
        spans.push(Span::styled("· ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            help,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
