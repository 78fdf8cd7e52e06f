use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use pin_core::{Article, Result, SiteConfig};

pub mod http;
pub mod memory;

pub use http::HttpFeed;
pub use memory::StaticFeed;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches the whole article list. Called once per page view.
    async fn fetch(&self) -> Result<Vec<Article>>;

    /// Returns a short label for logs
    fn describe(&self) -> String;
}

/// Picks the feed for a run: a local JSON file when given, the remote API
/// otherwise.
pub async fn create_feed(config: &SiteConfig, feed_file: Option<&Path>) -> Result<Arc<dyn FeedSource>> {
    match feed_file {
        Some(path) => Ok(Arc::new(StaticFeed::from_file(path).await?)),
        None => {
            config.validate()?;
            Ok(Arc::new(HttpFeed::new(config)?))
        }
    }
}

pub mod prelude {
    pub use super::{FeedSource, HttpFeed, StaticFeed};
    pub use pin_core::{Article, Error, Result};
}
