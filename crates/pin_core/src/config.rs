use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;

use crate::{Error, Result};

pub const DEFAULT_FEED_URL: &str = "https://santri.pondokinformatika.id/api/get/news";

/// Everything a page needs to know besides the feed itself.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site_name: String,
    pub feed_url: String,
    pub request_timeout: Duration,
    /// Articles per "load more" step on the home grid.
    pub home_page_size: usize,
    /// Articles per "load more" step on the archive.
    pub archive_page_size: usize,
    pub sidebar_size: usize,
    pub related_limit: usize,
    /// Articles younger than this never show up in the archive.
    pub archive_min_age: chrono::Duration,
    /// Artificial pause before a "load more" reveals the next slice.
    pub load_more_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Pondok Informatika News".to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            home_page_size: 10,
            archive_page_size: 6,
            sidebar_size: 4,
            related_limit: 8,
            archive_min_age: chrono::Duration::days(2),
            load_more_delay: Duration::from_millis(500),
        }
    }
}

impl SiteConfig {
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_load_more_delay(mut self, delay: Duration) -> Self {
        self.load_more_delay = delay;
        self
    }

    /// The instant separating fresh articles from archive ones.
    pub fn archive_threshold(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.archive_min_age
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.feed_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.feed_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{}: feed must be served over http(s)",
                self.feed_url
            )));
        }
        if self.home_page_size == 0 || self.archive_page_size == 0 {
            return Err(Error::Config("page sizes must be positive".to_string()));
        }
        Ok(())
    }
}
