//! Platform clipboard backed by arboard

use super::error::ClipboardError;
use super::traits::ClipboardSink;
use arboard::Clipboard;
use async_trait::async_trait;

/// The platform clipboard.
///
/// A fresh `arboard::Clipboard` is opened for each write on the blocking
/// pool, so the event loop never waits on the display server.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || {
            let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
            clipboard.set_text(text).map_err(ClipboardError::Write)
        })
        .await?
    }
}
