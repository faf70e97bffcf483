//! Clipboard hand-off for generated prompts

mod error;
mod system;
mod traits;

pub use error::ClipboardError;
pub use system::SystemClipboard;
pub use traits::ClipboardSink;

#[cfg(test)]
pub use traits::MockClipboardSink;

use crate::state::FormState;

/// Result of one background copy, delivered back to the event loop
#[derive(Debug)]
pub enum CopyOutcome {
    /// The prompt is on the clipboard
    Copied { chars: usize },
    /// The clipboard refused the prompt
    Failed(ClipboardError),
}

/// Render the prompt for `form` and write it to `clipboard`.
///
/// Returns the number of characters copied. Failures are logged here and
/// returned to the caller; `form` is only read.
pub async fn copy_prompt(
    clipboard: &dyn ClipboardSink,
    form: &FormState,
) -> Result<usize, ClipboardError> {
    let prompt = form.render_prompt();
    let chars = prompt.chars().count();
    tracing::debug!(chars, diagram_type = %form.diagram_type, "Copying prompt");

    match clipboard.write_text(prompt).await {
        Ok(()) => {
            tracing::info!(chars, "Prompt copied to clipboard");
            Ok(chars)
        }
        Err(err) => {
            tracing::error!("Failed to copy prompt: {err}");
            Err(err)
        }
    }
}

/// Run [`copy_prompt`] and fold the result into a [`CopyOutcome`]
pub async fn copy_prompt_outcome(clipboard: &dyn ClipboardSink, form: &FormState) -> CopyOutcome {
    match copy_prompt(clipboard, form).await {
        Ok(chars) => CopyOutcome::Copied { chars },
        Err(err) => CopyOutcome::Failed(err),
    }
}
