use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use pin_core::{Article, Result, SiteConfig};
use pin_listing::views::{ArchiveView, DetailView, HomeView, TagView};
use pin_listing::discover_tags;
use pin_render::{LinkStyle, PageRenderer};
use rand::Rng;

use crate::logging::Logger;

/// One rendered file of the static site.
#[derive(Debug)]
pub struct ExportedPage {
    pub file_name: String,
    pub html: String,
}

/// Renders every page reachable from the home page. Pure apart from `rng`,
/// which picks the related articles.
pub fn render_site<R: Rng + ?Sized>(
    articles: &[Article],
    config: &SiteConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<ExportedPage>> {
    let renderer = PageRenderer::new(config.site_name.clone(), LinkStyle::static_site(articles))?;
    let links = renderer.links();
    let mut pages = Vec::new();

    let mut page = 1;
    loop {
        let view = HomeView::build(articles.to_vec(), page, config);
        pages.push(ExportedPage {
            file_name: links.home_page(page),
            html: renderer.home(Ok(&view))?,
        });
        if !view.window.has_more() {
            break;
        }
        page += 1;
    }

    let mut page = 1;
    loop {
        let view = ArchiveView::build(articles, now, page, config);
        pages.push(ExportedPage {
            file_name: links.archive_page(page),
            html: renderer.archive(Ok(&view))?,
        });
        if !view.window.has_more() {
            break;
        }
        page += 1;
    }

    let mut written = HashSet::new();
    for article in articles {
        let file_name = links.article(&article.id);
        // Repeated ids share the first article's page.
        if !written.insert(file_name.clone()) {
            continue;
        }
        let view = DetailView::build(articles, &article.id, config, rng)?;
        pages.push(ExportedPage {
            file_name,
            html: renderer.article(Ok(&view))?,
        });
    }

    for tag in discover_tags(articles) {
        let file_name = links.tag(&tag);
        // Tags differing only in case share a page, as they share articles.
        if !written.insert(file_name.clone()) {
            continue;
        }
        let view = TagView::build(articles, &tag);
        pages.push(ExportedPage {
            file_name,
            html: renderer.tag(Some(tag.as_str()), Ok(&view))?,
        });
    }

    Ok(pages)
}

pub async fn write_site(pages: &[ExportedPage], out: &Path) -> Result<()> {
    let logger = Logger::new("export");
    tokio::fs::create_dir_all(out).await?;
    for page in pages {
        let path = out.join(&page.file_name);
        logger.debug(&format!("writing {}", path.display()));
        tokio::fs::write(&path, &page.html).await?;
    }
    logger.info(&format!("📦 Wrote {} pages to {}", pages.len(), out.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn article(id: &str, kategori: &str, created_at: &str) -> Article {
        Article {
            kategori: Some(kategori.to_string()),
            created_at: Some(created_at.to_string()),
            ..Article::new(id, format!("Berita {}", id))
        }
    }

    fn file_names(pages: &[ExportedPage]) -> Vec<&str> {
        pages.iter().map(|p| p.file_name.as_str()).collect()
    }

    #[test]
    fn test_render_site_pages() {
        let config = SiteConfig {
            home_page_size: 2,
            archive_page_size: 2,
            ..SiteConfig::default()
        };
        let articles = vec![
            article("1", "Kajian", "2020-01-01"),
            article("2", "Teknologi", "2020-02-01"),
            article("3", "kajian", "2020-03-01"),
        ];
        let now = Utc::now();
        let pages = render_site(&articles, &config, now, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(
            file_names(&pages),
            vec![
                "index.html",
                "index-2.html",
                "old-articles.html",
                "old-articles-2.html",
                "article-1.html",
                "article-2.html",
                "article-3.html",
                "tag-kajian.html",
                "tag-teknologi.html",
            ]
        );

        let index = &pages[0].html;
        assert!(index.contains("href=\"index-2.html\""));
        assert!(index.contains("href=\"article-3.html\""));
        assert!(!pages[1].html.contains("loadMoreBtn"));
    }

    fn page<'a>(pages: &'a [ExportedPage], name: &str) -> &'a str {
        pages
            .iter()
            .find(|p| p.file_name == name)
            .map(|p| p.html.as_str())
            .unwrap_or_else(|| panic!("{} not exported", name))
    }

    #[test]
    fn test_render_site_keeps_colliding_slugs_apart() {
        let articles = vec![
            article("1", "Info Pondok", "2020-01-01"),
            article("2", "Info-Pondok", "2020-02-01"),
            article("a b", "Kajian", "2020-03-01"),
            article("a-b", "Kajian", "2020-04-01"),
        ];
        let pages = render_site(&articles, &SiteConfig::default(), Utc::now(), &mut StdRng::seed_from_u64(5)).unwrap();

        let first = page(&pages, "tag-info-pondok.html");
        let second = page(&pages, "tag-info-pondok-2.html");
        assert!(first.contains("href=\"article-1.html\""));
        assert!(!first.contains("href=\"article-2.html\""));
        assert!(second.contains("href=\"article-2.html\""));

        // The article badge points at its own tag page.
        assert!(page(&pages, "article-2.html").contains("href=\"tag-info-pondok-2.html\""));

        assert!(page(&pages, "article-a-b.html").contains("<h1 class=\"fw-bold mb-3\">Berita a b</h1>"));
        assert!(page(&pages, "article-a-b-2.html").contains("<h1 class=\"fw-bold mb-3\">Berita a-b</h1>"));
    }

    #[test]
    fn test_render_empty_site() {
        let pages = render_site(&[], &SiteConfig::default(), Utc::now(), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(file_names(&pages), vec!["index.html", "old-articles.html"]);
        assert!(pages[0].html.contains("Tidak ada artikel tersedia"));
    }

    #[tokio::test]
    async fn test_write_site() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");
        let pages = vec![ExportedPage {
            file_name: "index.html".to_string(),
            html: "<html></html>".to_string(),
        }];

        write_site(&pages, &out).await.unwrap();

        let written = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(written, "<html></html>");
    }
}
