//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldName, FormState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// Draw one field of the prompt form, picking the widget from its kind
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    values: &FormState,
    is_active: bool,
) {
    let value = values.get(field);
    match field.kind() {
        FieldKind::Choice(options) => {
            draw_choice_field(frame, area, field, value, options, is_active)
        }
        FieldKind::Text { multiline } => {
            draw_text_field(frame, area, field, value, multiline, is_active)
        }
    }
}

/// Draw a single-choice selector as `◀ value ▶  (n/total)`
fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    options: &[&str],
    is_active: bool,
) {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let position = match options.iter().position(|o| *o == value) {
        Some(idx) => format!("  ({}/{})", idx + 1, options.len()),
        // Set from outside the offered list; shown as-is
        None => "  (custom)".to_string(),
    };
    let display = if value.is_empty() {
        field.placeholder()
    } else {
        value
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(display, value_style),
        Span::styled(" ▶", arrow_style),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(field_block(field.label(), is_active)),
        area,
    );
}

/// Draw a free text field with a cursor at the end when focused
fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    multiline: bool,
    is_active: bool,
) {
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));

    let block = field_block(field.label(), is_active);

    if value.is_empty() && !is_active {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(placeholder.block(block), area);
        return;
    }

    let content = if multiline {
        // split('\n') keeps a trailing empty line so the cursor follows Enter
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
        }
        Paragraph::new(lines)
    } else {
        let mut spans = vec![Span::raw(value.to_string())];
        if is_active {
            spans.push(cursor);
        }
        Paragraph::new(Line::from(spans))
    }
    .wrap(Wrap { trim: false });

    // Keep the last wrapped row (and the cursor) visible once the text
    // outgrows the box
    let inner = block.inner(area);
    let rows = if inner.width == 0 {
        0
    } else {
        content.line_count(inner.width)
    };
    let skip = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height);

    frame.render_widget(content.scroll((skip, 0)).block(block), area);
}
