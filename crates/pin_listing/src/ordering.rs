use std::cmp::Ordering;

use pin_core::Article;

/// Highest numeric id first. Ids with no leading digits go last, in feed order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(compare_newest_first);
}

/// Earliest effective date first. Undated articles count as 2000-01-01 and so
/// lead the list; unparseable dates trail it.
pub fn sort_oldest_first(articles: &mut [Article]) {
    articles.sort_by_cached_key(|a| match a.effective_date() {
        Some(date) => (0, Some(date)),
        None => (1, None),
    });
}

pub fn compare_newest_first(a: &Article, b: &Article) -> Ordering {
    match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
