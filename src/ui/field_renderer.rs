//! Field rendering utilities for the registration form

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one labeled input box.
///
/// The error indicator (red border) applies only when the caller decided the
/// error is visible, i.e. the field is touched and invalid.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display_value: &str,
    placeholder: &str,
    is_active: bool,
    has_error: bool,
) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_span = if display_value.is_empty() && !is_active {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(display_value.to_string(), Style::default().fg(Color::White))
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the error message line beneath a field.
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let error = Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, area);
    }
}
