//! Pattern-based markup extraction.
//!
//! All structural knowledge about the target site's markup is expressed as
//! regular expressions and funneled through the two functions in this module.
//! Nothing else in the crate runs a pattern against raw markup, so swapping
//! the matching strategy (say, for a tree-based parser) touches only this
//! seam and the pattern tables next to the parsers.
//!
//! Patterns are compiled with `(?s)` by their owners because the site's
//! structural markers span line boundaries.

use regex::Regex;

use crate::error::{NewsError, Result};

/// Return every non-overlapping substring of `source` matching `boundary`,
/// in order of first occurrence.
///
/// An empty vector is a legitimate result: a listing page with no article
/// containers simply has nothing to enumerate.
pub fn find_all(source: &str, boundary: &Regex) -> Vec<String> {
    boundary
        .find_iter(source)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Run `pattern` against `source` and return the named capture of the first
/// match.
///
/// # Errors
///
/// * [`NewsError::NoMatch`] if the pattern matches nothing at all. Callers
///   treat this as fatal: a required marker is gone.
/// * [`NewsError::MissingGroup`] if a match exists but the `group` capture is
///   absent or empty. Callers may treat this as "nothing extractable in this
///   fragment" and skip it.
pub fn first_capture(source: &str, pattern: &Regex, group: &str) -> Result<String> {
    let caps = pattern.captures(source).ok_or_else(|| NewsError::NoMatch {
        pattern: pattern.as_str().to_string(),
    })?;

    match caps.name(group) {
        Some(m) if !m.as_str().is_empty() => Ok(m.as_str().to_string()),
        _ => Err(NewsError::MissingGroup {
            pattern: pattern.as_str().to_string(),
            group: group.to_string(),
        }),
    }
}
