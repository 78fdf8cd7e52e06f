use std::collections::HashSet;

use pin_core::Article;

/// Distinct, non-blank categories in first-seen order.
pub fn discover_tags(articles: &[Article]) -> Vec<String> {
    let mut seen = HashSet::new();
    articles
        .iter()
        .filter_map(|a| a.kategori.as_deref())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.to_string()))
        .map(str::to_string)
        .collect()
}
