//! Page fetching behind an injectable collaborator trait.
//!
//! The cache gateway never talks to the network directly; it is handed
//! something implementing [`FetchPage`]. Production uses [`HttpFetcher`]
//! over `reqwest`; tests substitute counting mocks to observe exactly when
//! the cache decides to go to the network.

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::utils::truncate_for_log;

/// Synchronous-in-spirit page fetch: one URL in, the raw body out.
///
/// Implementations perform a plain GET with no custom headers. The caller
/// supplies a fully qualified URL.
pub trait FetchPage {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP implementation of [`FetchPage`] with an explicit request timeout.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests abort after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await;
        let body = match response {
            Ok(response) => response.error_for_status()?.text().await?,
            Err(e) => {
                warn!(elapsed_ms = t0.elapsed().as_millis() as u128, error = %e, "GET failed");
                return Err(e.into());
            }
        };

        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Fetched page"
        );
        debug!(preview = %truncate_for_log(&body, 300), "Fetched body preview");
        Ok(body)
    }
}
