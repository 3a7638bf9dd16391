//! Registration form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field box plus its error message line.
const FIELD_ROW_HEIGHT: u16 = 4;

/// Fields laid out two per row, mirroring the submission order.
const FIELD_ROWS: [[FieldId; 2]; 3] = [
    [FieldId::FirstName, FieldId::LastName],
    [FieldId::Email, FieldId::Password],
    [FieldId::ConfirmPassword, FieldId::Country],
];

/// Draw the registration form with the Register button and key hints
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Create your account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_ROW_HEIGHT), // first / last name
            Constraint::Length(FIELD_ROW_HEIGHT), // email / password
            Constraint::Length(FIELD_ROW_HEIGHT), // confirm / country
            Constraint::Length(1),                // spacer
            Constraint::Length(BUTTON_HEIGHT),    // Register
            Constraint::Length(1),                // help
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    for (row, pair) in FIELD_ROWS.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(2)
            .split(chunks[row]);
        for (column, id) in pair.iter().enumerate() {
            draw_field_cell(frame, columns[column], app, *id);
        }
    }

    draw_register_button(frame, chunks[4], app);
    draw_help(frame, chunks[5]);
}

/// One field box with its error line underneath.
fn draw_field_cell(frame: &mut Frame, area: Rect, app: &App, id: FieldId) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let is_active = app.state.form.active_field_id() == Some(id);
    let error = app.state.visible_error(id);

    let (display, placeholder) = if id == FieldId::Country {
        (
            app.state.country_display().unwrap_or_default(),
            "Select Country".to_string(),
        )
    } else {
        (
            app.state.form.field(id).display_value(),
            id.label().to_string(),
        )
    };

    draw_field(
        frame,
        parts[0],
        id.label(),
        &display,
        &placeholder,
        is_active,
        error.is_some(),
    );
    draw_field_error(frame, parts[1], error.as_deref());
}

fn draw_register_button(frame: &mut Frame, area: Rect, app: &App) {
    // Fixed-width button, left-aligned like the fields
    let button_area = Rect {
        width: area.width.min(14),
        ..area
    };
    render_button(
        frame,
        button_area,
        "Register",
        app.state.form.is_button_row_active(),
    );
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": previous  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": select/submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
