//! Application state definitions

use super::forms::{FormState, PromptForm};
use std::collections::VecDeque;

/// Lines scrolled per PageUp/PageDown in the preview
pub const PREVIEW_SCROLL_STEP: u16 = 5;

/// State of the single prompt view
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The prompt form
    pub form: PromptForm,
    /// Errors waiting to be shown, oldest first
    pub errors: VecDeque<String>,
    /// Vertical scroll offset of the prompt preview
    pub preview_scroll: u16,
    /// Largest useful offset for the current prompt and preview size
    pub preview_max_scroll: u16,
}

impl AppState {
    pub fn new(values: FormState) -> Self {
        Self {
            form: PromptForm::new(values),
            ..Default::default()
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error shown in the error dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn scroll_preview_up(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_sub(PREVIEW_SCROLL_STEP);
    }

    pub fn scroll_preview_down(&mut self) {
        self.preview_scroll = self
            .preview_scroll
            .saturating_add(PREVIEW_SCROLL_STEP)
            .min(self.preview_max_scroll);
    }

    /// Update the scroll limit, pulling the offset back if it now overshoots
    pub fn set_preview_max_scroll(&mut self, max: u16) {
        self.preview_max_scroll = max;
        self.preview_scroll = self.preview_scroll.min(max);
    }
}
