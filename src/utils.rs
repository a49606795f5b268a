//! Utility functions for console formatting, logging, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Fixed-width line wrapping for article output
//! - String truncation for logging
//! - File system validation for the cache directory

use std::fs as stdfs;
use std::path::Path;

use tokio::fs;
use tracing::{info, instrument};

use crate::error::Result;

/// Wrap `text` to a fixed column width for console output.
///
/// This is a greedy fixed-width wrap, not word-boundary-aware wrapping: a
/// break lands every `width` characters. If the character immediately before
/// or at the break position is a space, a bare newline goes in; otherwise a
/// hyphen plus newline splits the word mid-token, keeping the column strictly
/// at `width`. Candidate positions are bounded by the input's original
/// length, measured against the growing output, so lines after the first
/// absorb the inserted break characters.
///
/// `width == 0` disables wrapping and returns the input unchanged, as does
/// any `width` at or beyond the text length.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(wrap_line("abcdefghij", 5), "abcde-\nfghij");
/// assert_eq!(wrap_line("abcdefghij", 0), "abcdefghij");
/// ```
pub fn wrap_line(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut out: Vec<char> = text.chars().collect();
    let end = out.len();
    let mut i = width;
    while i < end {
        if out[i - 1] == ' ' || out[i] == ' ' {
            out.insert(i, '\n');
        } else {
            out.insert(i, '-');
            out.insert(i + 1, '\n');
        }
        i += width;
    }
    out.into_iter().collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` bytes with an ellipsis and byte count
/// indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", &s[..max], s.len() - max)
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file. Called once at process
/// start for the cache directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Cache directory is writable");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
