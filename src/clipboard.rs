//! System clipboard access for copying drawn sets and pasting number lists
//!
//! Uses arboard for cross-platform clipboard access

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to system clipboard
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(()); // Nothing to copy
    }

    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard.set_text(text.to_string())?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

/// Paste text from system clipboard
pub fn paste() -> Result<String> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    let text = clipboard.get_text()?;
    tracing::debug!("Pasted {} bytes from clipboard", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires clipboard access, may fail in CI
    fn test_copy_paste() {
        copy("3, 14, 15, 26, 35, 41").expect("Copy failed");
        assert_eq!(paste().expect("Paste failed"), "3, 14, 15, 26, 35, 41");
    }

    #[test]
    fn test_empty_copy() {
        // Should not touch the clipboard at all
        assert!(copy("").is_ok());
    }
}
