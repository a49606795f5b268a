//! Runtime configuration.
//!
//! Everything that used to be ambient (section URLs, the cache location,
//! timeouts, the fragment-handling policy) lives in an explicit [`Config`]
//! value constructed at startup and passed into the components that need it.
//! There is no process-wide static state.
//!
//! Defaults cover normal use; a YAML file supplied with `--config` overrides
//! any subset of fields.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::error::Result;

/// News section selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    Top,
    World,
    Tech,
    Finance,
    BreakingViews,
    Life,
}

/// How listing/article parsers treat a fragment that fails extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentPolicy {
    /// Fail the whole parse on the first unparsable fragment.
    #[default]
    Strict,
    /// Log the fragment and keep going. Useful when ad slots without a
    /// heading show up between stories.
    Lenient,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub top_news_url: String,
    pub world_news_url: String,
    pub tech_news_url: String,
    pub finance_news_url: String,
    pub breaking_views_url: String,
    pub life_news_url: String,
    /// Base for resolving the relative article links found on listing pages.
    pub base_url: String,
    /// Directory holding one cached page per fetched URL.
    pub cache_dir: PathBuf,
    /// Explicit per-request timeout for the HTTP client.
    pub fetch_timeout_secs: u64,
    /// `pageSize` query value used when requesting a specific listing page.
    pub page_size: u32,
    pub fragment_policy: FragmentPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_news_url: "https://www.reuters.com/news/archive/newsOne".to_string(),
            world_news_url: "https://www.reuters.com/world".to_string(),
            tech_news_url: "https://www.reuters.com/tech".to_string(),
            finance_news_url: "https://www.reuters.com/finance".to_string(),
            breaking_views_url: "https://www.reuters.com/breakingviews".to_string(),
            life_news_url: "https://www.reuters.com/lifestyle".to_string(),
            base_url: "https://www.reuters.com".to_string(),
            cache_dir: std::env::temp_dir().join("reuters_text_news"),
            fetch_timeout_secs: 30,
            page_size: 10,
            fragment_policy: FragmentPolicy::default(),
        }
    }
}

impl Config {
    /// Build the configuration, overlaying defaults with an optional YAML
    /// file.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                let config = serde_yaml::from_str(&text)?;
                info!(%path, "Loaded configuration");
                Ok(config)
            }
        }
    }

    /// Listing URL for a section.
    pub fn listing_url(&self, source: Source) -> &str {
        match source {
            Source::Top => &self.top_news_url,
            Source::World => &self.world_news_url,
            Source::Tech => &self.tech_news_url,
            Source::Finance => &self.finance_news_url,
            Source::BreakingViews => &self.breaking_views_url,
            Source::Life => &self.life_news_url,
        }
    }

    /// Listing URL for a specific page of a section, carrying the site's
    /// `view=page&page=<n>&pageSize=<size>` query parameters.
    pub fn paginated_url(&self, base: &str, page: u32) -> Result<String> {
        let mut url = Url::parse(base)?;
        url.query_pairs_mut()
            .append_pair("view", "page")
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &self.page_size.to_string());
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_selection() {
        let config = Config::default();
        assert_eq!(
            config.listing_url(Source::World),
            "https://www.reuters.com/world"
        );
        assert_eq!(
            config.listing_url(Source::BreakingViews),
            "https://www.reuters.com/breakingviews"
        );
        assert_eq!(
            config.listing_url(Source::Top),
            "https://www.reuters.com/news/archive/newsOne"
        );
    }

    #[test]
    fn test_paginated_url_query_parameters() {
        let config = Config::default();
        let url = config
            .paginated_url("https://www.reuters.com/world", 3)
            .unwrap();
        assert_eq!(
            url,
            "https://www.reuters.com/world?view=page&page=3&pageSize=10"
        );
    }

    #[test]
    fn test_paginated_url_rejects_garbage_base() {
        let config = Config::default();
        assert!(config.paginated_url("not a url", 1).is_err());
    }

    #[test]
    fn test_partial_yaml_overlays_defaults() {
        let yaml = "fragment_policy: lenient\nfetch_timeout_secs: 5\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.fragment_policy, FragmentPolicy::Lenient);
        assert_eq!(config.fetch_timeout_secs, 5);
        // Untouched fields keep their defaults.
        assert_eq!(config.world_news_url, "https://www.reuters.com/world");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.fragment_policy, FragmentPolicy::Strict);
        assert_eq!(config.base_url, "https://www.reuters.com");
    }

    #[test]
    fn test_load_reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "world_news_url: https://example.com/world\n").unwrap();

        let config = Config::load(path.to_str()).unwrap();
        assert_eq!(config.world_news_url, "https://example.com/world");
        assert_eq!(config.tech_news_url, "https://www.reuters.com/tech");
    }
}
