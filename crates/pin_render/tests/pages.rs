use pin_core::{Article, Error, SiteConfig};
use pin_listing::prelude::*;
use pin_render::{LinkStyle, PageRenderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn renderer() -> PageRenderer {
    PageRenderer::new("Pondok Informatika News", LinkStyle::Server).unwrap()
}

/// The markup between two container ids.
fn section<'a>(html: &'a str, from: &str, to: &str) -> &'a str {
    let start = html.find(from).unwrap_or_else(|| panic!("missing {}", from));
    let end = html[start..].find(to).map(|i| start + i).unwrap_or(html.len());
    &html[start..end]
}

fn positions(html: &str, ids: &[&str]) -> Vec<usize> {
    ids.iter()
        .map(|id| {
            html.find(&format!("article.html?id={}\"", id))
                .unwrap_or_else(|| panic!("article {} not rendered", id))
        })
        .collect()
}

#[test]
fn test_home_hero_and_sidebar_order() {
    let feed = vec![Article::new("3", "Tiga"), Article::new("1", "Satu"), Article::new("2", "Dua")];
    let view = HomeView::build(feed, 1, &SiteConfig::default());
    let html = renderer().home(Ok(&view)).unwrap();

    let hero = section(&html, "id=\"hero-content\"", "id=\"sidebar-articles\"");
    assert!(hero.contains("article.html?id=3\""));
    assert!(hero.contains("HEADLINE"));

    let sidebar = section(&html, "id=\"sidebar-articles\"", "id=\"tags-container\"");
    let at = positions(sidebar, &["2", "1"]);
    assert!(at[0] < at[1]);
    assert!(!sidebar.contains("article.html?id=3\""));

    assert!(!html.contains("loadMoreBtn"));
}

#[test]
fn test_home_load_more_link() {
    let feed: Vec<Article> = (1..=15).map(|i| Article::new(i.to_string(), "x")).collect();
    let config = SiteConfig::default();

    let html = renderer().home(Ok(&HomeView::build(feed.clone(), 1, &config))).unwrap();
    assert!(html.contains("id=\"loadMoreBtn\""));
    assert!(html.contains("index.html?page=2"));
    assert!(html.contains("id=\"load-more-text\""));

    let html = renderer().home(Ok(&HomeView::build(feed, 2, &config))).unwrap();
    assert!(!html.contains("loadMoreBtn"));
}

#[test]
fn test_home_lists_tags() {
    let feed = vec![
        Article { kategori: Some("Kajian".into()), ..Article::new("1", "a") },
        Article { kategori: Some("Info Pondok".into()), ..Article::new("2", "b") },
    ];
    let view = HomeView::build(feed, 1, &SiteConfig::default());
    let html = renderer().home(Ok(&view)).unwrap();

    let tags = section(&html, "id=\"tags-container\"", "id=\"articles-container\"");
    assert!(tags.contains("tag.html?tag=Kajian"));
    assert!(tags.contains("tag.html?tag=Info+Pondok"));
}

#[test]
fn test_titles_are_escaped() {
    let feed = vec![Article {
        description: Some("<img src=x onerror=alert(1)>".into()),
        ..Article::new("1", "<script>alert('x')</script>")
    }];
    let view = HomeView::build(feed, 1, &SiteConfig::default());
    let html = renderer().home(Ok(&view)).unwrap();

    assert!(!html.contains("<script>alert"));
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_empty_feed_panels() {
    let config = SiteConfig::default();
    let renderer = renderer();

    let home = renderer.home(Ok(&HomeView::build(vec![], 1, &config))).unwrap();
    assert!(home.contains("Tidak ada artikel tersedia"));
    assert!(home.contains("Tidak ada artikel lainnya"));
    assert!(!home.contains("loadMoreBtn"));

    let archive = renderer
        .archive(Ok(&ArchiveView::build(&[], chrono::Utc::now(), 1, &config)))
        .unwrap();
    assert!(archive.contains("Tidak ada artikel lama tersedia"));
    assert!(!archive.contains("load-more-btn"));

    let tag = renderer.tag(Some("Kajian"), Ok(&TagView::build(&[], "Kajian"))).unwrap();
    assert!(tag.contains("Tidak ada artikel dengan tag ini"));
    assert!(tag.contains("Tag: Kajian"));
}

#[test]
fn test_feed_failure_panels() {
    let error = Error::Status {
        url: "https://example.com".into(),
        status: 502,
    };
    let renderer = renderer();

    let home = renderer.home(Err(&error)).unwrap();
    assert!(home.contains("Terjadi Kesalahan"));
    assert!(home.contains("Gagal memuat artikel. Silakan refresh halaman."));
    assert!(home.contains("Coba Lagi"));
    assert!(!home.contains("loadMoreBtn"));

    let archive = renderer.archive(Err(&error)).unwrap();
    assert!(archive.contains("Gagal memuat artikel lama"));
}

#[test]
fn test_article_page() {
    let feed = vec![
        Article {
            content: Some("<p>Isi&nbsp;<b>lengkap</b></p>".into()),
            description: Some("Ringkasan singkat".into()),
            kategori: Some("Kajian".into()),
            author: Some("Penulis".into()),
            ..Article::new("5", "Judul Lima")
        },
        Article::new("6", "Judul Enam"),
    ];
    let mut rng = StdRng::seed_from_u64(3);
    let view = DetailView::build(&feed, "5", &SiteConfig::default(), &mut rng).unwrap();
    let html = renderer().article(Ok(&view)).unwrap();

    assert!(html.contains("<title>Judul Lima - Pondok Informatika News</title>"));
    assert!(html.contains("content=\"Ringkasan singkat\""));
    assert!(html.contains("Isi lengkap"));
    assert!(html.contains("Di tulis oleh: Penulis"));
    assert!(html.contains("article.html?id=6\""));
}

#[test]
fn test_article_not_found_and_missing_id() {
    let renderer = renderer();

    let html = renderer.article(Err(&Error::NotFound("999".into()))).unwrap();
    assert!(html.contains("Artikel yang Anda cari tidak ditemukan"));
    assert!(html.contains("Kembali ke Beranda"));

    let html = renderer.article(Err(&Error::MissingParameter("id"))).unwrap();
    assert!(html.contains("ID artikel tidak valid"));

    let html = renderer.tag(None, Err(&Error::MissingParameter("tag"))).unwrap();
    assert!(html.contains("Tag tidak ditemukan"));
    assert!(!html.contains("tag-title"));
}
