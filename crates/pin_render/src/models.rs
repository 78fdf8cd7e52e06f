use pin_core::{Article, Error};
use serde::Serialize;

use crate::content::excerpt;
use crate::dates::archive_date;
use crate::links::LinkStyle;

pub const DEFAULT_CATEGORY: &str = "Umum";
pub const DEFAULT_DATE: &str = "Hari ini";
pub const DEFAULT_AUTHOR: &str = "Admin";
pub const READ_MORE: &str = "Baca selengkapnya...";

/// Per-template defaults for a card.
#[derive(Debug, Clone, Copy)]
pub struct CardStyle {
    pub placeholder: &'static str,
    pub excerpt_len: usize,
    pub long_dates: bool,
}

impl CardStyle {
    pub const HERO: CardStyle = CardStyle {
        placeholder: "https://via.placeholder.com/800x400/DC3545/FFFFFF?text=Pondok+Informatika",
        excerpt_len: 150,
        long_dates: false,
    };
    pub const SIDEBAR: CardStyle = CardStyle {
        placeholder: "https://via.placeholder.com/150x100/6C757D/FFFFFF?text=News",
        excerpt_len: 0,
        long_dates: false,
    };
    pub const GRID: CardStyle = CardStyle {
        placeholder: "https://via.placeholder.com/400x250/DC3545/FFFFFF?text=News",
        excerpt_len: 100,
        long_dates: false,
    };
    pub const TAG: CardStyle = CardStyle {
        placeholder: "https://via.placeholder.com/320x180/DC3545/FFFFFF?text=News",
        excerpt_len: 80,
        long_dates: false,
    };
    pub const ARCHIVE: CardStyle = CardStyle {
        placeholder: "https://via.placeholder.com/400x250/0056b3/FFFFFF?text=Artikel+Lama",
        excerpt_len: 100,
        long_dates: true,
    };
    pub const RELATED: CardStyle = CardStyle {
        placeholder: "https://via.placeholder.com/80x60",
        excerpt_len: 0,
        long_dates: false,
    };
}

#[derive(Debug, Clone, Serialize)]
pub struct CardModel {
    pub id: String,
    pub href: String,
    pub title: String,
    pub image: String,
    pub category: String,
    pub category_href: Option<String>,
    pub excerpt: String,
    pub date: String,
}

impl CardModel {
    pub fn from_article(article: &Article, style: CardStyle, links: &LinkStyle) -> Self {
        let date = if style.long_dates {
            archive_date(article.display_date())
        } else {
            article.display_date().unwrap_or(DEFAULT_DATE).to_string()
        };

        Self {
            id: article.id.clone(),
            href: links.article(&article.id),
            title: article.title.clone(),
            image: article
                .image_url
                .clone()
                .unwrap_or_else(|| style.placeholder.to_string()),
            category: article
                .kategori
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            category_href: article.kategori.as_deref().map(|k| links.tag(k)),
            excerpt: excerpt(article.description.as_deref(), style.excerpt_len, READ_MORE),
            date,
        }
    }

    pub fn many(articles: &[Article], style: CardStyle, links: &LinkStyle) -> Vec<Self> {
        articles
            .iter()
            .map(|a| Self::from_article(a, style, links))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    Empty,
    Failed,
    Invalid,
    NotFound,
}

/// The boxed message that replaces a page's content when there is nothing to
/// show or something went wrong.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub heading: String,
    pub message: String,
    /// Offer a reload button.
    pub retry: bool,
    pub home_href: Option<String>,
}

impl Panel {
    pub fn empty(heading: &str, message: &str) -> Self {
        Self {
            kind: PanelKind::Empty,
            heading: heading.to_string(),
            message: message.to_string(),
            retry: false,
            home_href: None,
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            kind: PanelKind::Failed,
            heading: "Terjadi Kesalahan".to_string(),
            message: message.to_string(),
            retry: true,
            home_href: None,
        }
    }

    pub fn with_home(mut self, href: String) -> Self {
        self.home_href = Some(href);
        self
    }

    /// Maps a page error to its panel. `failure` is the page's own wording
    /// for a feed failure, `missing` the one for an absent parameter.
    pub fn from_error(error: &Error, failure: &str, missing: &str) -> Self {
        match error {
            Error::MissingParameter(_) => Self {
                kind: PanelKind::Invalid,
                retry: false,
                ..Self::failed(missing)
            },
            Error::NotFound(_) => Self {
                kind: PanelKind::NotFound,
                retry: false,
                ..Self::failed("Artikel yang Anda cari tidak ditemukan")
            },
            _ => Self::failed(failure),
        }
    }
}
