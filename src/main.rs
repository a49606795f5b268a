//! # Reuters Text News
//!
//! A console news reader that fetches Reuters listing pages, extracts
//! article titles and links with pattern-based parsing, and prints either a
//! numbered table of contents or one article's full text wrapped to a fixed
//! column width.
//!
//! ## Usage
//!
//! ```sh
//! # List world-news titles
//! reuters_text_news
//!
//! # Read article 2 of the tech section at 80 columns
//! reuters_text_news -s tech -g 2 -w 80
//! ```
//!
//! ## Architecture
//!
//! The flow per invocation:
//! 1. **Resolve**: pick the section URL, append pagination parameters if a
//!    page was requested
//! 2. **Load**: serve the raw markup from the per-URL disk cache, fetching
//!    only when the slot is missing, stale, or `--refresh` was given
//! 3. **Parse**: split the markup into fragments and extract titles/links
//!    (listing) or paragraph text (article)
//! 4. **Print**: numbered titles, or wrapped paragraphs for `--goto`

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cache;
mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod models;
mod parsers;
mod utils;

use cache::CacheStore;
use cli::Cli;
use config::Config;
use fetch::HttpFetcher;
use models::{select_article, ArticleRecord};
use utils::{ensure_writable_dir, wrap_line};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    if let Err(e) = run(args).await {
        error!(error = %e, "news read failed");
        return Err(e.into());
    }
    Ok(())
}

async fn run(args: Cli) -> error::Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(policy) = args.fragment_policy {
        config.fragment_policy = policy;
    }

    ensure_writable_dir(&config.cache_dir).await?;

    let fetcher = HttpFetcher::new(Duration::from_secs(config.fetch_timeout_secs))?;
    let cache = CacheStore::new(config.cache_dir.clone());

    let section_url = config.listing_url(args.source);
    let listing_url = match args.page {
        Some(page) => config.paginated_url(section_url, page)?,
        None => section_url.to_string(),
    };
    info!(%listing_url, source = ?args.source, "Loading listing");

    let listing_html = cache.load(&listing_url, args.refresh, &fetcher).await?;
    let records = parsers::listing::parse_listing(&listing_html, config.fragment_policy)?;

    match args.goto {
        None => print_titles(&records),
        Some(index) => {
            let record = select_article(&records, index)?;
            let article_url = Url::parse(&config.base_url)?.join(&record.url)?;
            info!(%article_url, title = %record.title, "Loading article");

            let article_html = cache
                .load(article_url.as_str(), args.refresh, &fetcher)
                .await?;
            let paragraphs =
                parsers::article::parse_article(&article_html, config.fragment_policy)?;
            print_paragraphs(&paragraphs, args.wrap);
        }
    }

    Ok(())
}

fn print_titles(records: &[ArticleRecord]) {
    for (i, record) in records.iter().enumerate() {
        println!("[{}] {}", i, record.title);
    }
}

fn print_paragraphs(paragraphs: &[String], width: usize) {
    for paragraph in paragraphs {
        println!("{}", wrap_line(paragraph, width));
    }
}
