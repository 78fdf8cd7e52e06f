use async_trait::async_trait;
use pin_core::{Article, Error, FeedEnvelope, Result, SiteConfig};
use reqwest::Client;
use tracing::{debug, info};

use crate::FeedSource;

/// The remote news API. One GET per fetch, no retries, no caching.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            url: config.feed_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<Vec<Article>> {
        debug!("📡 Fetching feed from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope = FeedEnvelope::from_json(&body)?;
        info!("📰 Loaded {} articles from {}", envelope.data.len(), self.url);
        Ok(envelope.data)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
