//! Article-page parser.
//!
//! An article page carries its body as a run of `<p>` elements whose class
//! starts with `Paragraph-paragraph`. Extraction returns the inner text of
//! each, in reading order, with no HTML-entity decoding: the output may
//! still contain `&amp;`-style entities, exactly as the page serves them.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::config::FragmentPolicy;
use crate::error::Result;
use crate::extract::{find_all, first_capture};

/// One body paragraph on an article page.
static PARAGRAPH_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<p class="Paragraph-paragraph[^"]*"[^>]*>.*?</p>"#)
        .expect("paragraph block pattern")
});

/// The inner text of a paragraph fragment.
static PARAGRAPH_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<p class="Paragraph-paragraph[^"]*"[^>]*>(?P<content>.*?)</p>"#)
        .expect("paragraph text pattern")
});

/// All body-paragraph fragments of an article page, in reading order.
pub fn split_paragraphs(article_html: &str) -> Vec<String> {
    find_all(article_html, &PARAGRAPH_BLOCK)
}

/// The inner text of one paragraph fragment, entities left as-is.
pub fn extract_text(fragment: &str) -> Result<String> {
    first_capture(fragment, &PARAGRAPH_TEXT, "content")
}

/// Parse an article page into its paragraph strings. Pure function of the
/// input: re-running on the same markup yields the same output.
pub fn parse_article(article_html: &str, policy: FragmentPolicy) -> Result<Vec<String>> {
    let fragments = split_paragraphs(article_html);
    let mut paragraphs = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        match extract_text(&fragment) {
            Ok(text) => paragraphs.push(text),
            Err(e) if policy == FragmentPolicy::Lenient && e.is_fragment_failure() => {
                warn!(error = %e, "Skipping empty paragraph fragment");
            }
            Err(e) => return Err(e),
        }
    }

    info!(count = paragraphs.len(), "Parsed article body");
    Ok(paragraphs)
}
