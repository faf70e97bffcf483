//! Live preview of the generated prompt

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn preview_block() -> Block<'static> {
    Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn prompt_paragraph(prompt: &str) -> Paragraph<'_> {
    Paragraph::new(prompt).wrap(Wrap { trim: false })
}

/// Text area inside the preview borders
pub fn inner_area(area: Rect) -> Rect {
    preview_block().inner(area)
}

/// Furthest the preview can scroll while the last wrapped row stays on
/// screen. `viewport` is the inner text area.
pub fn max_scroll(prompt: &str, viewport: Rect) -> u16 {
    if viewport.width == 0 {
        return 0;
    }
    let rows = prompt_paragraph(prompt).line_count(viewport.width);
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    rows.saturating_sub(viewport.height)
}

/// Draw the prompt exactly as it will be copied
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let prompt = app.state.form.values.render_prompt();

    // Stored offset may predate a resize or a shorter prompt
    let scroll = app
        .state
        .preview_scroll
        .min(max_scroll(&prompt, inner_area(area)));

    let paragraph = prompt_paragraph(&prompt)
        .block(preview_block())
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_prompt_does_not_scroll() {
        let viewport = Rect::new(0, 0, 80, 20);
        assert_eq!(max_scroll("one\ntwo\nthree", viewport), 0);
    }

    #[test]
    fn test_wrapped_rows_count_toward_scroll() {
        // 35 chars in a 10-wide viewport wrap onto 4 rows each
        let prompt = format!("{}\n{}", "a".repeat(35), "b".repeat(35));
        let viewport = Rect::new(0, 0, 10, 3);
        assert_eq!(max_scroll(&prompt, viewport), 5);
    }

    #[test]
    fn test_zero_width_viewport() {
        assert_eq!(max_scroll("text", Rect::new(0, 0, 0, 5)), 0);
    }

    #[test]
    fn test_inner_area_strips_borders() {
        assert_eq!(inner_area(Rect::new(0, 0, 70, 22)), Rect::new(1, 1, 68, 20));
    }
}
