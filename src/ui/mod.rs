//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod preview;

use crate::app::App;
use components::render_error_dialog;
use ratatui::{layout::Rect, Frame};

/// Inner text area of the preview for a screen of the given size
pub fn preview_viewport(screen: Rect) -> Rect {
    preview::inner_area(layout::create_layout(screen).preview)
}

/// Scroll limit of the preview for `prompt` shown in `viewport`
pub fn preview_max_scroll(prompt: &str, viewport: Rect) -> u16 {
    preview::max_scroll(prompt, viewport)
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout::create_layout(frame.area());

    layout::draw_header(frame, layout.header);
    forms::draw_prompt_form(frame, layout.form, app);
    preview::draw(frame, layout.preview, app);
    layout::draw_status_bar(frame, layout.status, app);

    // Errors are modal and drawn last
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
