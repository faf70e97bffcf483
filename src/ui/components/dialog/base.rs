//! Base dialog component

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Used for the title and the border
    pub accent: Color,
    /// Message content, may contain `\n`
    pub message: &'a str,
    /// Hint line at the bottom (e.g. "Press Enter to dismiss")
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Render a dialog centered over whatever is already drawn
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    // Borders plus one column of padding on each side
    let chrome = 4u16;
    let max_width = config.max_width.min(area.width);
    let text_width = max_width.saturating_sub(chrome).max(1) as usize;

    let wrapped = wrap_text(config.message, text_width);
    let widest = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain([config.title.chars().count()])
        .max()
        .unwrap_or(0) as u16;

    let width = (widest + chrome).min(max_width);
    // title + blank + message (+ blank + hint) + borders
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + wrapped.len() as u16 + hint_rows + 2).min(area.height);

    let dialog_area = centered(area, width, height);
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::default());
        content.push(hint);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent));
    let dialog = Paragraph::new(content)
        .block(block.padding(ratatui::widgets::Padding::horizontal(1)))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Greedy word wrap by character count. Words longer than `max_width` are
/// split, and blank input lines are kept.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();
            while !chars.is_empty() {
                let room = if current_len == 0 {
                    max_width
                } else {
                    max_width.saturating_sub(current_len + 1)
                };
                if chars.len() <= room {
                    if current_len > 0 {
                        current.push(' ');
                    }
                    current.extend(chars.drain(..));
                    current_len = current.chars().count();
                } else if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                } else {
                    let rest = chars.split_off(max_width);
                    lines.push(chars.iter().collect());
                    chars = rest;
                }
            }
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("copy failed", 40), vec!["copy failed"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("clipboard unavailable on this display", 15),
            vec!["clipboard", "unavailable on", "this display"]
        );
    }

    #[test]
    fn test_wrap_fills_line_exactly() {
        assert_eq!(wrap_text("ab cd ef", 5), vec!["ab cd", "ef"]);
        assert_eq!(wrap_text("a b c d", 3), vec!["a b", "c d"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 40, 6);
        assert_eq!(rect, Rect::new(20, 9, 40, 6));
    }
}
