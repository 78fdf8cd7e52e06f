//! Pure transformations over a loaded article list: ordering, filtering,
//! sampling, tag discovery and pagination. Nothing in here performs I/O; the
//! caller owns the list and whatever cursor it keeps.

pub mod filters;
pub mod ordering;
pub mod pagination;
pub mod params;
pub mod related;
pub mod tags;
pub mod views;

pub use filters::{archive_articles, by_category, find_article};
pub use ordering::{sort_newest_first, sort_oldest_first};
pub use pagination::{LoadMore, LoadMoreController, PageWindow};
pub use params::{page_param, required_param};
pub use related::related_articles;
pub use tags::discover_tags;
pub use views::{ArchiveView, DetailView, HomeView, TagView};

pub mod prelude {
    pub use super::views::{ArchiveView, DetailView, HomeView, TagView};
    pub use super::{LoadMore, LoadMoreController, PageWindow};
    pub use pin_core::{Article, Error, Result, SiteConfig};
}
