use chrono::{DateTime, Utc};
use pin_core::{Article, Error, Result, SiteConfig};
use rand::Rng;

use crate::filters::{archive_articles, by_category, find_article};
use crate::ordering::sort_newest_first;
use crate::pagination::PageWindow;
use crate::related::related_articles;
use crate::tags::discover_tags;

/// The home page: a headline, the next few stories beside it, and the grid.
#[derive(Debug, Clone)]
pub struct HomeView {
    pub hero: Option<Article>,
    pub sidebar: Vec<Article>,
    pub grid: Vec<Article>,
    pub tags: Vec<String>,
    pub window: PageWindow,
}

impl HomeView {
    pub fn build(mut articles: Vec<Article>, page: usize, config: &SiteConfig) -> Self {
        sort_newest_first(&mut articles);

        let window = PageWindow::new(page, config.home_page_size, articles.len());
        Self {
            hero: articles.first().cloned(),
            sidebar: articles
                .iter()
                .skip(1)
                .take(config.sidebar_size)
                .cloned()
                .collect(),
            grid: window.slice(&articles).to_vec(),
            tags: discover_tags(&articles),
            window,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hero.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ArchiveView {
    pub articles: Vec<Article>,
    pub window: PageWindow,
}

impl ArchiveView {
    pub fn build(articles: &[Article], now: DateTime<Utc>, page: usize, config: &SiteConfig) -> Self {
        let archive = archive_articles(articles, config.archive_threshold(now));
        let window = PageWindow::new(page, config.archive_page_size, archive.len());
        Self {
            articles: window.slice(&archive).to_vec(),
            window,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.window.total == 0
    }
}

#[derive(Debug, Clone)]
pub struct TagView {
    pub tag: String,
    pub articles: Vec<Article>,
}

impl TagView {
    pub fn build(articles: &[Article], tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            articles: by_category(articles, tag),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DetailView {
    pub article: Article,
    pub related: Vec<Article>,
}

impl DetailView {
    pub fn build<R: Rng + ?Sized>(
        articles: &[Article],
        id: &str,
        config: &SiteConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let article = find_article(articles, id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(Self {
            related: related_articles(articles, id, config.related_limit, rng),
            article,
        })
    }
}
