use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use pin_core::{Article, FeedEnvelope, Result};
use tokio::sync::RwLock;

use crate::FeedSource;

/// A feed held in memory: offline rendering, `--feed-file`, and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    articles: Arc<RwLock<Vec<Article>>>,
    label: String,
}

impl StaticFeed {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(RwLock::new(articles)),
            label: "memory://".to_string(),
        }
    }

    /// Reads a file holding the same `{ data: [...] }` envelope as the API.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let body = tokio::fs::read_to_string(path).await?;
        let envelope = FeedEnvelope::from_json(&body)?;
        Ok(Self {
            articles: Arc::new(RwLock::new(envelope.data)),
            label: format!("file://{}", path.display()),
        })
    }

    pub async fn replace(&self, articles: Vec<Article>) {
        *self.articles.write().await = articles;
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
