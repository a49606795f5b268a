//! On-disk cache for raw page content.
//!
//! The store keeps one slot per fetched URL (the slot file name is the
//! percent-encoded URL), so switching sections or pages can never serve
//! bytes that belong to a different URL. Freshness is judged from the slot
//! file's last-write time: anything older than [`STALE_AFTER_HOURS`] is
//! refetched, anything younger is served without touching the network.
//!
//! Fetch failures abort the load as-is. There is no retry and no fallback to
//! a stale slot.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local};
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::fetch::FetchPage;

/// Age beyond which a cached page is no longer served. Fixed policy, not a
/// per-call knob.
pub const STALE_AFTER_HOURS: i64 = 1;

/// A directory of per-URL cache slots.
#[derive(Debug)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Slot file for a URL. Percent-encoding keeps the key collision-free
    /// and filesystem-safe.
    pub fn slot_path(&self, url: &str) -> PathBuf {
        self.dir.join(urlencoding::encode(url).as_ref())
    }

    /// Return the raw page content for `url`, fetching through `fetcher`
    /// only when the slot is missing, stale, or `force_refresh` is set.
    /// Every fetch overwrites the slot with the fresh bytes.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures ([`crate::error::NewsError::Fetch`]) and
    /// slot file I/O errors; a fetch failure leaves the slot untouched.
    #[instrument(level = "info", skip_all, fields(%url, force_refresh))]
    pub async fn load(
        &self,
        url: &str,
        force_refresh: bool,
        fetcher: &impl FetchPage,
    ) -> Result<String> {
        let path = self.slot_path(url);

        if !force_refresh {
            if let Some(cached) = self.fresh_slot(&path).await? {
                info!(bytes = cached.len(), "Serving cached page");
                return Ok(cached);
            }
        }

        let body = fetcher.fetch(url).await?;
        fs::write(&path, &body).await?;
        info!(bytes = body.len(), path = %path.display(), "Cached fetched page");
        Ok(body)
    }

    /// Cached bytes if the slot exists and is still fresh, `None` otherwise.
    /// Reading is side-effect-free.
    async fn fresh_slot(&self, path: &Path) -> Result<Option<String>> {
        let meta = match fs::metadata(path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No cached copy");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let modified: DateTime<Local> = meta.modified()?.into();
        if is_stale(modified, Local::now()) {
            info!(path = %path.display(), %modified, "Cached copy is stale");
            return Ok(None);
        }

        let cached = fs::read_to_string(path).await?;
        Ok(Some(cached))
    }
}

/// Freshness predicate: a slot written more than [`STALE_AFTER_HOURS`] ago
/// no longer counts. A last-write time in the future (clock adjustment)
/// counts as fresh.
fn is_stale(modified: DateTime<Local>, now: DateTime<Local>) -> bool {
    now.signed_duration_since(modified) > Duration::hours(STALE_AFTER_HOURS)
}
