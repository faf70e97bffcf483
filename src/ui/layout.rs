//! Layout components (header, body split, status bar)

use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use crate::state::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Narrower terminals stack the preview under the form
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub preview: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, preview and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let body = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        form: body[0],
        preview: body[1],
        status: rows[2],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        " Mermaid Prompt Generator",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

/// Key hints for whatever currently has focus
fn focus_hints(app: &App) -> &'static str {
    let form = &app.state.form;
    match form.active_field_name().map(|field| field.kind()) {
        Some(FieldKind::Choice(_)) => "←/→: change  ",
        Some(FieldKind::Text { .. }) => "type to edit  Enter: newline  ",
        None => "Enter: copy  ",
    }
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(focus_hints(app), Style::default().fg(Color::Gray)),
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
        Span::styled(COPY_SHORTCUT, key_style),
        Span::raw(": copy  "),
        Span::styled("PgUp/PgDn", key_style),
        Span::raw(": scroll preview  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ];

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_terminal_places_preview_beside_form() {
        let layout = create_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.form.y, layout.preview.y);
        assert_eq!(layout.form.width, 60);
        assert_eq!(layout.preview.x, 60);
    }

    #[test]
    fn test_narrow_terminal_stacks_preview_below_form() {
        let layout = create_layout(Rect::new(0, 0, 80, 42));
        assert_eq!(layout.form.x, layout.preview.x);
        assert_eq!(layout.form.width, 80);
        assert_eq!(layout.form.height, 20);
        assert_eq!(layout.preview.y, 21);
    }
}
