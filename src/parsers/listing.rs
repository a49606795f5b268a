//! Listing-page parser.
//!
//! A listing page enumerates stories, each inside an `<article>` container
//! holding a heading (class contains `title`) and a link. Fragments appear
//! in document order, which reflects the site's presentation order with the
//! top story first.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::config::FragmentPolicy;
use crate::error::Result;
use crate::extract::{find_all, first_capture};
use crate::models::ArticleRecord;

/// One story container on the listing page.
static ARTICLE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<article\b[^>]*>.*?</article>").expect("article block pattern")
});

/// The heading inside a story container. Surrounding whitespace stays
/// outside the capture.
static ARTICLE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<h\d[^>]*class="[^"]*title[^"]*"[^>]*>\s*(?P<title>.*?)\s*</h\d>"#)
        .expect("article title pattern")
});

/// The first hyperlink inside a story container.
static ARTICLE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)<a href="(?P<url>.*?)">"#).expect("article link pattern"));

/// All story fragments of a listing page, in document order. A page without
/// story containers yields an empty vector.
pub fn split_articles(listing_html: &str) -> Vec<String> {
    find_all(listing_html, &ARTICLE_BLOCK)
}

/// The first heading text inside one story fragment.
pub fn extract_title(fragment: &str) -> Result<String> {
    first_capture(fragment, &ARTICLE_TITLE, "title")
}

/// The first hyperlink target inside one story fragment.
pub fn extract_url(fragment: &str) -> Result<String> {
    first_capture(fragment, &ARTICLE_LINK, "url")
}

/// Parse a listing page into one [`ArticleRecord`] per story fragment.
///
/// Under [`FragmentPolicy::Strict`] the first fragment that fails title or
/// URL extraction fails the whole parse. Under [`FragmentPolicy::Lenient`]
/// such fragments (ad slots without a heading, mostly) are logged and
/// skipped, and the surviving records keep their document order.
pub fn parse_listing(listing_html: &str, policy: FragmentPolicy) -> Result<Vec<ArticleRecord>> {
    let fragments = split_articles(listing_html);
    let mut records = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        match record_from_fragment(fragment) {
            Ok(record) => records.push(record),
            Err(e) if policy == FragmentPolicy::Lenient && e.is_fragment_failure() => {
                warn!(error = %e, "Skipping unparsable listing fragment");
            }
            Err(e) => return Err(e),
        }
    }

    info!(count = records.len(), "Parsed listing");
    Ok(records)
}

fn record_from_fragment(fragment: String) -> Result<ArticleRecord> {
    let title = extract_title(&fragment)?;
    let url = extract_url(&fragment)?;
    Ok(ArticleRecord {
        raw_fragment: fragment,
        title,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NewsError;

    const LISTING_PAGE: &str = r#"<html><body>
<article class="story">
  <h3 class="story-title">
    Markets rally as rates hold
  </h3>
  <p>summary text</p>
  <a href="/article/markets-rally-idUSKBN001">Read more</a>
</article>
<article class="story">
  <h3 class="story-title">Chip makers expand fabs</h3>
  <a href="/article/chip-makers-idUSKBN002">Read more</a>
</article>
<article class="story">
  <h2 class="media-story-title">Storm lashes coastal towns</h2>
  <a href="/article/storm-idUSKBN003">Read more</a>
</article>
</body></html>"#;

    const AD_FRAGMENT: &str = r#"<article class="slot">
  <div class="promo">Sponsored content</div>
  <a href="/sponsored/offer">See offer</a>
</article>"#;

    #[test]
    fn test_split_articles_finds_every_container() {
        let fragments = split_articles(LISTING_PAGE);
        assert_eq!(fragments.len(), 3);
        assert!(fragments[0].contains("Markets rally"));
        assert!(fragments[2].contains("Storm lashes"));
    }

    #[test]
    fn test_split_articles_empty_page() {
        assert!(split_articles("<html><body>no stories</body></html>").is_empty());
    }

    #[test]
    fn test_extract_title_strips_surrounding_whitespace() {
        let fragments = split_articles(LISTING_PAGE);
        assert_eq!(
            extract_title(&fragments[0]).unwrap(),
            "Markets rally as rates hold"
        );
    }

    #[test]
    fn test_extract_url_takes_first_link() {
        let fragments = split_articles(LISTING_PAGE);
        assert_eq!(
            extract_url(&fragments[1]).unwrap(),
            "/article/chip-makers-idUSKBN002"
        );
    }

    #[test]
    fn test_parse_listing_preserves_document_order() {
        let records = parse_listing(LISTING_PAGE, FragmentPolicy::Strict).unwrap();
        assert_eq!(records.len(), 3);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Markets rally as rates hold",
                "Chip makers expand fabs",
                "Storm lashes coastal towns"
            ]
        );
        for record in &records {
            assert!(!record.title.is_empty());
            assert!(!record.url.is_empty());
            assert!(record.raw_fragment.starts_with("<article"));
        }
    }

    #[test]
    fn test_strict_policy_fails_on_ad_fragment() {
        let page = format!("{LISTING_PAGE}{AD_FRAGMENT}");
        let err = parse_listing(&page, FragmentPolicy::Strict).unwrap_err();
        assert!(matches!(err, NewsError::NoMatch { .. }));
    }

    #[test]
    fn test_lenient_policy_skips_ad_fragment() {
        let page = format!("{LISTING_PAGE}{AD_FRAGMENT}");
        let records = parse_listing(&page, FragmentPolicy::Lenient).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].title, "Storm lashes coastal towns");
    }

    #[test]
    fn test_heading_spanning_lines_is_matched() {
        // The structural markers span line boundaries on the real pages.
        let fragment = "<article>\n<h4 class=\"title\">\nTwo line\nheadline\n</h4>\n<a href=\"/x\">go</a>\n</article>";
        assert_eq!(extract_title(fragment).unwrap(), "Two line\nheadline");
    }
}
