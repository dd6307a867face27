//! Cross-platform clipboard access.
//!
//! On Linux the external tools `wl-copy`, `xclip` and `xsel` are tried first,
//! in that order, because their content outlives the process; `arboard` is
//! the fallback there and the only backend elsewhere.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard backend could be reached.
    #[error("Clipboard not available")]
    NotAvailable,
    /// A backend was reached but rejected the text.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Clipboard Manager
// ============================================================================

/// Copies text to the system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardManager;

impl ClipboardManager {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is not available or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if Self::copy_with_external_tool(text) {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }

        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================
