use pin_core::{Error, Result};
use pin_listing::views::{ArchiveView, DetailView, HomeView, TagView};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::content::{clean_html_content, truncate};
use crate::links::LinkStyle;
use crate::models::{CardModel, CardStyle, Panel, TagLink, DEFAULT_AUTHOR, DEFAULT_CATEGORY, DEFAULT_DATE};

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    ("_panel.html", include_str!("../templates/_panel.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("article.html", include_str!("../templates/article.html")),
    ("tag.html", include_str!("../templates/tag.html")),
    ("old_articles.html", include_str!("../templates/old_articles.html")),
];

const META_DESCRIPTION_LEN: usize = 160;

#[derive(Serialize)]
struct Nav {
    home: String,
    archive: String,
}

#[derive(Serialize)]
struct Chrome<'a> {
    site_name: &'a str,
    page_title: String,
    og_title: String,
    meta_description: String,
    nav: Nav,
}

#[derive(Serialize)]
struct HomeContext<'a> {
    #[serde(flatten)]
    chrome: Chrome<'a>,
    hero: Option<CardModel>,
    sidebar: Vec<CardModel>,
    grid: Vec<CardModel>,
    tags: Vec<TagLink>,
    load_more_href: Option<String>,
    panel: Option<Panel>,
    failed: bool,
}

#[derive(Serialize)]
struct ArticleModel {
    title: String,
    image: Option<String>,
    category: String,
    category_href: Option<String>,
    date: String,
    author: String,
    content: String,
}

#[derive(Serialize)]
struct ArticleContext<'a> {
    #[serde(flatten)]
    chrome: Chrome<'a>,
    article: Option<ArticleModel>,
    related: Vec<CardModel>,
    panel: Option<Panel>,
}

#[derive(Serialize)]
struct TagContext<'a> {
    #[serde(flatten)]
    chrome: Chrome<'a>,
    tag: Option<&'a str>,
    articles: Vec<CardModel>,
    panel: Option<Panel>,
}

#[derive(Serialize)]
struct ArchiveContext<'a> {
    #[serde(flatten)]
    chrome: Chrome<'a>,
    articles: Vec<CardModel>,
    load_more_href: Option<String>,
    panel: Option<Panel>,
}

/// Renders whole pages. Every page accepts either its view or the error that
/// prevented building it, and always produces a complete document.
pub struct PageRenderer {
    tera: Tera,
    site_name: String,
    links: LinkStyle,
}

impl PageRenderer {
    pub fn new(site_name: impl Into<String>, links: LinkStyle) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec()).map_err(render_error)?;
        Ok(Self {
            tera,
            site_name: site_name.into(),
            links,
        })
    }

    pub fn links(&self) -> &LinkStyle {
        &self.links
    }

    pub fn home(&self, view: std::result::Result<&HomeView, &Error>) -> Result<String> {
        let chrome = self.chrome(None, None);
        let context = match view {
            Ok(view) if view.is_empty() => HomeContext {
                chrome,
                hero: None,
                sidebar: Vec::new(),
                grid: Vec::new(),
                tags: Vec::new(),
                load_more_href: None,
                panel: Some(Panel::empty("Tidak ada artikel tersedia", "Silakan coba lagi nanti")),
                failed: false,
            },
            Ok(view) => HomeContext {
                chrome,
                hero: view
                    .hero
                    .as_ref()
                    .map(|a| CardModel::from_article(a, CardStyle::HERO, &self.links)),
                sidebar: CardModel::many(&view.sidebar, CardStyle::SIDEBAR, &self.links),
                grid: CardModel::many(&view.grid, CardStyle::GRID, &self.links),
                tags: self.tag_links(&view.tags),
                load_more_href: view.window.next_page().map(|p| self.links.home_page(p)),
                panel: None,
                failed: false,
            },
            Err(error) => HomeContext {
                chrome,
                hero: None,
                sidebar: Vec::new(),
                grid: Vec::new(),
                tags: Vec::new(),
                load_more_href: None,
                panel: Some(Panel::from_error(
                    error,
                    "Gagal memuat artikel. Silakan refresh halaman.",
                    "Permintaan tidak valid.",
                )),
                failed: true,
            },
        };
        self.render("home.html", &context)
    }

    pub fn article(&self, view: std::result::Result<&DetailView, &Error>) -> Result<String> {
        let context = match view {
            Ok(view) => {
                let article = &view.article;
                let description = article
                    .description
                    .as_deref()
                    .map(|d| truncate(d, META_DESCRIPTION_LEN))
                    .unwrap_or_else(|| format!("Artikel dari {}", self.site_name));
                let body = article
                    .content
                    .as_deref()
                    .or(article.description.as_deref())
                    .unwrap_or_default();

                let mut chrome = self.chrome(Some(&article.title), Some(description));
                chrome.og_title = article.title.clone();

                ArticleContext {
                    chrome,
                    article: Some(ArticleModel {
                        title: article.title.clone(),
                        image: article.image_url.clone(),
                        category: article
                            .kategori
                            .clone()
                            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                        category_href: article.kategori.as_deref().map(|k| self.links.tag(k)),
                        date: article.display_date().unwrap_or(DEFAULT_DATE).to_string(),
                        author: article.author_name().unwrap_or(DEFAULT_AUTHOR).to_string(),
                        content: clean_html_content(body),
                    }),
                    related: CardModel::many(&view.related, CardStyle::RELATED, &self.links),
                    panel: None,
                }
            }
            Err(error) => ArticleContext {
                chrome: self.chrome(None, None),
                article: None,
                related: Vec::new(),
                panel: Some(
                    Panel::from_error(
                        error,
                        "Gagal memuat artikel. Silakan coba lagi.",
                        "Artikel tidak ditemukan. ID artikel tidak valid.",
                    )
                    .with_home(self.links.home()),
                ),
            },
        };
        self.render("article.html", &context)
    }

    pub fn tag(&self, tag: Option<&str>, view: std::result::Result<&TagView, &Error>) -> Result<String> {
        let title = tag.map(|t| format!("Tag: {}", t));
        let chrome = self.chrome(title.as_deref(), None);
        let context = match view {
            Ok(view) if view.is_empty() => TagContext {
                chrome,
                tag,
                articles: Vec::new(),
                panel: Some(
                    Panel::empty("Tidak ada artikel dengan tag ini", "Silakan coba tag lainnya")
                        .with_home(self.links.home()),
                ),
            },
            Ok(view) => TagContext {
                chrome,
                tag,
                articles: CardModel::many(&view.articles, CardStyle::TAG, &self.links),
                panel: None,
            },
            Err(error) => TagContext {
                chrome,
                tag,
                articles: Vec::new(),
                panel: Some(
                    Panel::from_error(
                        error,
                        "Gagal memuat artikel. Silakan refresh halaman.",
                        "Tag tidak ditemukan",
                    )
                    .with_home(self.links.home()),
                ),
            },
        };
        self.render("tag.html", &context)
    }

    pub fn archive(&self, view: std::result::Result<&ArchiveView, &Error>) -> Result<String> {
        let chrome = self.chrome(Some("Artikel Lama"), None);
        let context = match view {
            Ok(view) if view.is_empty() => ArchiveContext {
                chrome,
                articles: Vec::new(),
                load_more_href: None,
                panel: Some(Panel::empty("Tidak ada artikel lama tersedia", "Silakan coba lagi nanti")),
            },
            Ok(view) => ArchiveContext {
                chrome,
                articles: CardModel::many(&view.articles, CardStyle::ARCHIVE, &self.links),
                load_more_href: view.window.next_page().map(|p| self.links.archive_page(p)),
                panel: None,
            },
            Err(error) => ArchiveContext {
                chrome,
                articles: Vec::new(),
                load_more_href: None,
                panel: Some(Panel::from_error(
                    error,
                    "Gagal memuat artikel lama. Silakan refresh halaman.",
                    "Permintaan tidak valid.",
                )),
            },
        };
        self.render("old_articles.html", &context)
    }

    fn chrome(&self, title: Option<&str>, description: Option<String>) -> Chrome<'_> {
        let page_title = match title {
            Some(title) => format!("{} - {}", title, self.site_name),
            None => self.site_name.clone(),
        };
        Chrome {
            site_name: &self.site_name,
            og_title: page_title.clone(),
            page_title,
            meta_description: description
                .unwrap_or_else(|| format!("Berita terbaru dari {}", self.site_name)),
            nav: Nav {
                home: self.links.home(),
                archive: self.links.archive_page(1),
            },
        }
    }

    fn tag_links(&self, tags: &[String]) -> Vec<TagLink> {
        tags.iter()
            .map(|t| TagLink {
                name: t.clone(),
                href: self.links.tag(t),
            })
            .collect()
    }

    fn render<T: Serialize>(&self, template: &str, context: &T) -> Result<String> {
        debug!("rendering {}", template);
        let context = Context::from_serialize(context).map_err(render_error)?;
        self.tera.render(template, &context).map_err(render_error)
    }
}

fn render_error(error: tera::Error) -> Error {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    Error::Render(message)
}
