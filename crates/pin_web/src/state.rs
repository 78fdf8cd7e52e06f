use std::sync::Arc;

use pin_core::{Result, SiteConfig};
use pin_feed::FeedSource;
use pin_render::{LinkStyle, PageRenderer};

pub struct AppState {
    pub feed: Arc<dyn FeedSource>,
    pub config: SiteConfig,
    pub renderer: PageRenderer,
}

impl AppState {
    pub fn new(feed: Arc<dyn FeedSource>, config: SiteConfig) -> Result<Self> {
        let renderer = PageRenderer::new(config.site_name.clone(), LinkStyle::Server)?;
        Ok(Self {
            feed,
            config,
            renderer,
        })
    }
}
