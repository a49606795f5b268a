//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The default invocation lists the world-news section; flags select other
//! sections, pagination, a single article to read in full, and output
//! wrapping.

use clap::Parser;

use crate::config::{FragmentPolicy, Source};

/// Command-line arguments for the news reader.
///
/// # Examples
///
/// ```sh
/// # List the current world-news titles
/// reuters_text_news
///
/// # Read article 3 of the tech section, wrapped at 80 columns
/// reuters_text_news -s tech -g 3 -w 80
///
/// # Force a refetch of page 2 of the finance listing
/// reuters_text_news -s finance -p 2 -r
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News section to read
    #[arg(short, long, value_enum, default_value_t = Source::World)]
    pub source: Source,

    /// Load a specific page of the listing
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Open the article at this listing index instead of listing titles
    #[arg(short, long)]
    pub goto: Option<usize>,

    /// Maximum line width for article text; 0 disables wrapping
    #[arg(short, long, default_value_t = 100)]
    pub wrap: usize,

    /// Refetch even if the cached copy is still fresh
    #[arg(short, long)]
    pub refresh: bool,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the fragment handling policy from the config
    #[arg(long, value_enum)]
    pub fragment_policy: Option<FragmentPolicy>,
}
