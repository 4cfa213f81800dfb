//! System clipboard access for `y`
//!
//! A fresh `arboard::Clipboard` per copy; nothing is held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails without a display server (headless Linux, SSH) or on permission
/// errors; callers turn that into a toast.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text.to_owned())
        .context("Failed to set clipboard text")
}
