//! Searchable country picker modal

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the picker as a centered modal over the form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let modal = centered_rect(area, 50, 70);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Select Country ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search input
            Constraint::Min(0),    // results
            Constraint::Length(1), // help
        ])
        .split(inner);

    draw_search_input(frame, chunks[0], app);
    draw_results(frame, chunks[1], app);
    draw_help(frame, chunks[2]);
}

fn draw_search_input(frame: &mut Frame, area: Rect, app: &App) {
    let query = &app.state.picker.query;
    let input_text = if query.is_empty() {
        Span::styled("Search countries", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(query.as_str(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(Line::from(input_text)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, area);

    frame.set_cursor_position((area.x + 1 + query.chars().count() as u16, area.y + 1));
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let matches = app.state.picker.matches();

    if matches.is_empty() {
        let empty = Paragraph::new("No matching countries")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = matches
        .iter()
        .map(|country| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", country.flag)),
                Span::styled(
                    format!("{:<3}", country.code),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(country.name),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default().with_selected(Some(app.state.picker.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
        Span::raw(": move  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": select  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": close"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Rectangle centered in `area` with the given percentage size.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
