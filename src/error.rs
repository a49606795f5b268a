//! Error types shared across the crate.
//!
//! Every failure the core can produce is a [`NewsError`] variant. The core
//! performs no retries and suppresses nothing; callers decide whether a
//! variant is fatal (fetch failures, markup drift, bad indexes) or a
//! per-fragment condition they may skip under the lenient parsing policy.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NewsError>;

#[derive(Error, Debug)]
pub enum NewsError {
    /// Network, transport, or HTTP-status failure while fetching a page.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A required extraction pattern matched nothing. This signals that the
    /// site's markup no longer looks like what the patterns expect.
    #[error("pattern `{pattern}` matched nothing")]
    NoMatch { pattern: String },

    /// A pattern matched, but the named capture group was absent or empty.
    /// Fragment-level "nothing extractable".
    #[error("match for `{pattern}` has no usable `{group}` capture")]
    MissingGroup { pattern: String, group: String },

    /// The requested article index points past the end of the listing.
    #[error("article index {index} is out of range for a listing of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl NewsError {
    /// True for failures scoped to a single markup fragment, the only kind
    /// the lenient parsing policy is allowed to skip.
    pub fn is_fragment_failure(&self) -> bool {
        matches!(
            self,
            NewsError::NoMatch { .. } | NewsError::MissingGroup { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_failures_are_classified() {
        let no_match = NewsError::NoMatch {
            pattern: "<article>".to_string(),
        };
        let missing = NewsError::MissingGroup {
            pattern: "<a>".to_string(),
            group: "url".to_string(),
        };
        let out_of_range = NewsError::IndexOutOfRange { index: 9, len: 3 };

        assert!(no_match.is_fragment_failure());
        assert!(missing.is_fragment_failure());
        assert!(!out_of_range.is_fragment_failure());
    }

    #[test]
    fn test_index_out_of_range_display() {
        let e = NewsError::IndexOutOfRange { index: 12, len: 10 };
        assert_eq!(
            e.to_string(),
            "article index 12 is out of range for a listing of 10"
        );
    }
}
