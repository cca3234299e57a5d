// src/clipboard.rs
use clipboard::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Destination for copied passwords. The system implementation talks to the
/// platform clipboard; tests swap in recording or failing stubs.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the operating system.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        log::debug!("wrote {} characters to the clipboard", text.len());
        Ok(())
    }
}
