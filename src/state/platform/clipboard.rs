//! Cross-platform clipboard access.
//!
//! On Linux the external tools `wl-copy`, `xclip`, and `xsel` are tried
//! first because they keep the content after the process exits; `arboard`
//! is the fallback everywhere.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// Failed to copy text to clipboard.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error if no clipboard mechanism works.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "linux")]
    if copy_with_external_tool(text) {
        return Ok(());
    }

    let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
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
    TOOLS.iter().any(|(tool, args)| try_tool(tool, args, text))
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
