use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use pin_core::Article;
use pin_listing::discover_tags;
use tracing::warn;
use url::form_urlencoded;

/// Where pages live. The server keeps the `*.html?param=` URLs; the
/// static export writes one flat file per page, named from a [`SlugTable`].
#[derive(Debug, Clone, Default)]
pub enum LinkStyle {
    #[default]
    Server,
    Static(Arc<SlugTable>),
}

impl LinkStyle {
    /// Static links for a site exported from `articles`.
    pub fn static_site(articles: &[Article]) -> Self {
        LinkStyle::Static(Arc::new(SlugTable::build(articles)))
    }

    pub fn home(&self) -> String {
        self.home_page(1)
    }

    pub fn home_page(&self, page: usize) -> String {
        match (self, page) {
            (_, 0 | 1) => "index.html".to_string(),
            (LinkStyle::Server, page) => format!("index.html?page={}", page),
            (LinkStyle::Static(_), page) => format!("index-{}.html", page),
        }
    }

    pub fn archive_page(&self, page: usize) -> String {
        match (self, page) {
            (_, 0 | 1) => "old-articles.html".to_string(),
            (LinkStyle::Server, page) => format!("old-articles.html?page={}", page),
            (LinkStyle::Static(_), page) => format!("old-articles-{}.html", page),
        }
    }

    pub fn article(&self, id: &str) -> String {
        match self {
            LinkStyle::Server => format!("article.html?id={}", query_value(id)),
            LinkStyle::Static(slugs) => format!("article-{}.html", slugs.article(id)),
        }
    }

    pub fn tag(&self, tag: &str) -> String {
        match self {
            LinkStyle::Server => format!("tag.html?tag={}", query_value(tag.trim())),
            LinkStyle::Static(slugs) => format!("tag-{}.html", slugs.tag(tag)),
        }
    }
}

/// File slugs for one export, unique per kind. When two ids or two tags fold
/// to the same slug the later one gets a `-2`, `-3`, ... suffix.
#[derive(Debug, Clone, Default)]
pub struct SlugTable {
    articles: HashMap<String, String>,
    tags: HashMap<String, String>,
}

impl SlugTable {
    pub fn build(articles: &[Article]) -> Self {
        let mut table = SlugTable::default();

        let mut used = HashSet::new();
        for article in articles {
            if table.articles.contains_key(&article.id) {
                continue;
            }
            let slug = unique_slug(&article.id, &mut used);
            table.articles.insert(article.id.clone(), slug);
        }

        // Tags match ignoring case, so "Kajian" and "kajian" share a page.
        let mut used = HashSet::new();
        for tag in discover_tags(articles) {
            let key = tag_key(&tag);
            if table.tags.contains_key(&key) {
                continue;
            }
            let slug = unique_slug(&tag, &mut used);
            table.tags.insert(key, slug);
        }

        table
    }

    pub fn article(&self, id: &str) -> String {
        self.articles
            .get(id)
            .cloned()
            .unwrap_or_else(|| file_slug(id))
    }

    pub fn tag(&self, tag: &str) -> String {
        self.tags
            .get(&tag_key(tag))
            .cloned()
            .unwrap_or_else(|| file_slug(tag))
    }
}

fn tag_key(tag: &str) -> String {
    tag.trim().to_lowercase()
}

fn unique_slug(value: &str, used: &mut HashSet<String>) -> String {
    let base = file_slug(value);
    let mut slug = base.clone();
    let mut n = 2;
    while !used.insert(slug.clone()) {
        slug = format!("{}-{}", base, n);
        n += 1;
    }
    if slug != base {
        warn!("slug {:?} already taken, {:?} exported as {:?}", base, value, slug);
    }
    slug
}

fn query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Lowercase ASCII letters and digits, everything else folded into single
/// dashes. Tags match case-insensitively, so lowercasing loses nothing.
pub fn file_slug(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.to_string()
    }
}
