//! Copy-event-link utility.
//!
//! Builds a deep link to an event anchor and puts it on the system
//! clipboard. The platform clipboard (arboard) is tried first; when it is
//! unavailable (headless session, missing display server) the text is
//! emitted as an OSC 52 escape sequence instead, which most terminal
//! emulators translate into a clipboard write. No state is retained
//! between copies.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::io::Write;

/// Builds the deep link for an event anchor.
///
/// Any fragment already present on the base URL is stripped first. With
/// no base URL the link degrades to the bare fragment.
#[must_use]
pub fn event_url(page_url: Option<&str>, anchor_id: &str) -> String {
    let base = page_url
        .map(|url| url.split('#').next().unwrap_or(url))
        .unwrap_or_default();
    format!("{base}#event-{anchor_id}")
}

/// Writes `text` to the system clipboard, falling back to OSC 52.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => Ok(()),
        Err(_) => osc52_copy(text),
    }
}

/// Clipboard write via the OSC 52 terminal escape sequence.
fn osc52_copy(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", BASE64.encode(text))
        .and_then(|()| stdout.flush())
        .context("Failed to write OSC 52 clipboard sequence")
}
