//! Clipboard error types

use thiserror::Error;

/// Why a prompt could not be written to the clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (no display server, permission denied)
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    /// The clipboard was opened but refused the text
    #[error("clipboard rejected the text: {0}")]
    Write(#[source] arboard::Error),

    /// The background write panicked or was cancelled
    #[error("clipboard task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}
