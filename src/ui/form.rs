//! Registration form rendering

use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows the form needs: ten bordered fields of height 3.
pub const FIELD_HEIGHT: u16 = 3;

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Registration Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain([Constraint::Min(0)])
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in FieldId::ALL.iter().enumerate() {
        draw_field(frame, chunks[idx], app, *field, idx == app.state.active_field);
    }
}

/// Draw one field: bordered value line, in-flight marker, and the field's
/// error message inside the title row when present.
fn draw_field(frame: &mut Frame, area: Rect, app: &App, field: FieldId, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if app.state.field_error(field).is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = app.state.record.get(field);
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut spans = vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ];
    if app.state.field_busy(field) {
        spans.push(Span::styled(
            "  looking up…",
            Style::default().fg(Color::Yellow),
        ));
    }

    let title = match app.state.field_error(field) {
        Some(message) => format!(" {}: {} ", field.label(), message),
        None => format!(" {} ", field.label()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
