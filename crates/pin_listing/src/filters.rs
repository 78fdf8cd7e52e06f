use chrono::{DateTime, Utc};
use pin_core::Article;

use crate::ordering::{sort_newest_first, sort_oldest_first};

/// Articles strictly older than `threshold`, oldest first. Articles whose date
/// cannot be parsed are left out.
pub fn archive_articles(articles: &[Article], threshold: DateTime<Utc>) -> Vec<Article> {
    let mut archive: Vec<Article> = articles
        .iter()
        .filter(|a| matches!(a.effective_date(), Some(date) if date < threshold))
        .cloned()
        .collect();
    sort_oldest_first(&mut archive);
    archive
}

/// Articles whose `kategori` equals `tag` ignoring case, newest first.
pub fn by_category(articles: &[Article], tag: &str) -> Vec<Article> {
    let mut tagged: Vec<Article> = articles
        .iter()
        .filter(|a| a.has_category(tag))
        .cloned()
        .collect();
    sort_newest_first(&mut tagged);
    tagged
}

pub fn find_article<'a>(articles: &'a [Article], id: &str) -> Option<&'a Article> {
    articles.iter().find(|a| a.id == id)
}
