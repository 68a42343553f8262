//! Clipboard functionality for copying calculator results.

use crate::error::{CalcError, Result};
use arboard::Clipboard;
use tracing::debug;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(CalcError::ClipboardAccess)?;

    clipboard
        .set_text(text.to_string())
        .map_err(CalcError::ClipboardWrite)?;

    debug!(text, "copied result to clipboard");
    Ok(())
}
