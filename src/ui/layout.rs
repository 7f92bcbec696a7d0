//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar: submission feedback on the left, key help on the right
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw("  "));
    }

    spans.extend([
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]);

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}
