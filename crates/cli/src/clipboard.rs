//! Best-effort copy of a share link to the system clipboard.
//!
//! OS-specific shell-outs: pbcopy on macOS, xclip/xsel on Linux,
//! clip.exe on Windows. Callers treat failure as fire-and-forget: log it
//! and move on, no retry, the link is printed on stdout anyway.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Why a clipboard write did not happen.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard support on this platform")]
    Unsupported,

    #[error("failed to run clipboard helper {helper}: {source}")]
    Spawn {
        helper: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to clipboard helper {helper}: {source}")]
    Pipe {
        helper: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard helper {helper} exited with an error")]
    HelperFailed { helper: &'static str },
}

/// Copy `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "macos")]
    {
        pipe_through("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        // xclip first, xsel as fallback.
        pipe_through("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_through("xsel", &["--clipboard", "--input"], text))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_through("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(ClipboardError::Unsupported)
    }
}

#[allow(dead_code)]
fn pipe_through(helper: &'static str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(helper)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|source| ClipboardError::Spawn { helper, source })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|source| ClipboardError::Pipe { helper, source })?;
    }

    let status = child
        .wait()
        .map_err(|source| ClipboardError::Pipe { helper, source })?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::HelperFailed { helper })
    }
}
