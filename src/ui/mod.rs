//! UI module for rendering the TUI

mod components;
mod country_picker;
mod field_renderer;
mod form;

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    form::draw(frame, chunks[0], app);
    draw_status_bar(frame, chunks[1], app);

    // Modal picker renders over the form
    if app.state.current_view == View::CountryPicker {
        country_picker::draw(frame, chunks[0], app);
    }
}

fn draw_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let (text, color) = match &app.state.status_message {
        Some(message) if app.state.submitted => (message.as_str(), Color::Green),
        Some(message) => (message.as_str(), Color::Yellow),
        None => ("signup-tui", Color::DarkGray),
    };

    let status = Paragraph::new(text).style(Style::default().fg(color));
    frame.render_widget(status, area);
}
