//! Application state and core logic

use crate::clipboard::{copy_prompt_outcome, ClipboardSink, CopyOutcome};
use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, Form};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Confirmation shown in the status bar after a successful copy
pub const COPY_CONFIRMATION: &str = "Prompt copied to clipboard!";

/// Screen size assumed until the first frame reports the real one
const DEFAULT_SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Clipboard the prompt is copied to
    clipboard: Arc<dyn ClipboardSink>,
    /// Background copies report here
    copy_tx: UnboundedSender<CopyOutcome>,
    copy_rx: UnboundedReceiver<CopyOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Inner text area of the preview, used for scroll limits
    preview_viewport: Rect,
}

impl App {
    /// Create a new App instance with the form populated from `config`
    pub fn new(config: &TuiConfig, clipboard: Arc<dyn ClipboardSink>) -> Self {
        let (copy_tx, copy_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::new(config.initial_form_state()),
            clipboard,
            copy_tx,
            copy_rx,
            quit: false,
            copy_message: None,
            preview_viewport: ui::preview_viewport(DEFAULT_SCREEN),
        };
        app.refresh_preview_bounds();
        app
    }

    /// Record the screen size before drawing so preview scrolling matches
    /// what is on screen
    pub fn set_screen_size(&mut self, width: u16, height: u16) {
        self.preview_viewport = ui::preview_viewport(Rect::new(0, 0, width, height));
        self.refresh_preview_bounds();
    }

    /// Recompute the preview scroll limit from the current prompt
    fn refresh_preview_bounds(&mut self) {
        let prompt = self.state.form.values.render_prompt();
        let max = ui::preview_max_scroll(&prompt, self.preview_viewport);
        self.state.set_preview_max_scroll(max);
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        let on_copy_button = self.state.form.is_copy_button_active();
        let on_selector = !on_copy_button && !self.state.form.is_active_field_multiline();
        // Modified chars (Ctrl+..., Alt+...) are shortcuts, not text input
        let is_shortcut = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char(c)
                if c.eq_ignore_ascii_case(&platform::COPY_KEY)
                    && platform::is_copy_modifier(key.modifiers) =>
            {
                self.copy_prompt();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::PageUp => self.state.scroll_preview_up(),
            KeyCode::PageDown => self.state.scroll_preview_down(),
            KeyCode::Enter if on_copy_button => self.copy_prompt(),
            KeyCode::Left | KeyCode::Up if on_selector => self.state.form.cycle_option(false),
            KeyCode::Right | KeyCode::Down if on_selector => self.state.form.cycle_option(true),
            KeyCode::Char(c) if !is_shortcut => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Enter => self.state.form.newline(),
            _ => {}
        }

        // Edits can shrink the prompt below the current scroll offset
        self.refresh_preview_bounds();
        Ok(())
    }

    /// Handle a bracketed paste into the focused text field
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors() {
            return;
        }
        self.copy_message = None;
        // Terminals deliver pasted line breaks as \r or \r\n
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.state.form.insert_str(&normalized);
        self.refresh_preview_bounds();
    }

    /// Copy the current prompt without blocking the event loop.
    ///
    /// The write runs as a detached task; its outcome is picked up by
    /// [`App::drain_copy_outcomes`]. The form values are snapshotted, so
    /// edits made while the copy is in flight do not affect it.
    pub fn copy_prompt(&mut self) {
        let clipboard = Arc::clone(&self.clipboard);
        let form = self.state.form.values.clone();
        let tx = self.copy_tx.clone();

        tokio::spawn(async move {
            let outcome = copy_prompt_outcome(clipboard.as_ref(), &form).await;
            // The receiver lives as long as the app; a send error means we are exiting
            let _ = tx.send(outcome);
        });
    }

    /// Apply every finished copy to the notification state.
    /// Returns how many outcomes were applied.
    pub fn drain_copy_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.copy_rx.try_recv() {
            self.apply_copy_outcome(outcome);
            applied += 1;
        }
        applied
    }

    fn apply_copy_outcome(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied { chars } => {
                tracing::debug!(chars, "Copy confirmed");
                self.copy_message = Some(COPY_CONFIRMATION.to_string());
            }
            CopyOutcome::Failed(err) => {
                self.copy_message = None;
                self.push_error(format!("Failed to copy: {err}"));
            }
        }
    }
}
