//! Trait abstraction for the clipboard to enable mocking in tests

use super::error::ClipboardError;
use async_trait::async_trait;

/// Destination for copied prompt text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}
