use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use pin_core::{Article, Error, Result, SiteConfig};
use pin_feed::{FeedSource, StaticFeed};
use pin_web::{create_app, AppState};
use tower::ServiceExt;

/// Counts fetches and optionally fails them.
struct ProbeFeed {
    inner: StaticFeed,
    fail: bool,
    fetches: AtomicUsize,
}

impl ProbeFeed {
    fn ok(articles: Vec<Article>) -> Arc<Self> {
        Arc::new(Self {
            inner: StaticFeed::new(articles),
            fail: false,
            fetches: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            inner: StaticFeed::default(),
            fail: true,
            fetches: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl FeedSource for ProbeFeed {
    async fn fetch(&self) -> Result<Vec<Article>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Status {
                url: "https://example.invalid/api/get/news".into(),
                status: 503,
            });
        }
        self.inner.fetch().await
    }

    fn describe(&self) -> String {
        "probe".into()
    }
}

fn sample_feed() -> Vec<Article> {
    vec![
        Article {
            kategori: Some("Kajian".into()),
            created_at: Some("2020-01-01 08:00:00".into()),
            ..Article::new("3", "Tiga")
        },
        Article {
            kategori: Some("Teknologi".into()),
            created_at: Some("2021-06-01 08:00:00".into()),
            ..Article::new("1", "Satu")
        },
        Article {
            kategori: Some("kajian".into()),
            created_at: Some(chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()),
            ..Article::new("2", "Dua")
        },
    ]
}

async fn get(feed: Arc<ProbeFeed>, uri: &str) -> (StatusCode, String) {
    let state = AppState::new(feed, SiteConfig::default()).unwrap();
    let response = create_app(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_page() {
    let (status, body) = get(ProbeFeed::ok(sample_feed()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"hero-content\""));
    assert!(body.contains("Tiga"));

    let (status, _) = get(ProbeFeed::ok(sample_feed()), "/index.html?page=abc").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_every_view_refetches() {
    let feed = ProbeFeed::ok(sample_feed());
    let state = AppState::new(feed.clone(), SiteConfig::default()).unwrap();
    let app = create_app(state);

    for uri in ["/", "/old-articles", "/tag?tag=kajian"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(feed.fetches.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_article_page() {
    let (status, body) = get(ProbeFeed::ok(sample_feed()), "/article.html?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Satu - Pondok Informatika News</title>"));
    assert!(body.contains("id=\"article-content\""));
}

#[tokio::test]
async fn test_article_not_found() {
    let (status, body) = get(ProbeFeed::ok(sample_feed()), "/article?id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Artikel yang Anda cari tidak ditemukan"));
}

#[tokio::test]
async fn test_missing_parameters_skip_fetch() {
    let feed = ProbeFeed::ok(sample_feed());
    let (status, body) = get(feed.clone(), "/article").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("ID artikel tidak valid"));

    let (status, body) = get(feed.clone(), "/tag.html?tag=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Tag tidak ditemukan"));

    assert_eq!(feed.fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_tag_page_ignores_case() {
    let (status, body) = get(ProbeFeed::ok(sample_feed()), "/tag?tag=KAJIAN").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tag: KAJIAN"));
    assert!(body.contains("Tiga"));
    assert!(body.contains("Dua"));
    assert!(!body.contains("Satu"));

    let (_, body) = get(ProbeFeed::ok(sample_feed()), "/tag?tag=olahraga").await;
    assert!(body.contains("Tidak ada artikel dengan tag ini"));
}

#[tokio::test]
async fn test_archive_excludes_fresh_articles() {
    let (status, body) = get(ProbeFeed::ok(sample_feed()), "/old-articles").await;
    assert_eq!(status, StatusCode::OK);
    let tiga = body.find("Tiga").unwrap();
    let satu = body.find("Satu").unwrap();
    assert!(tiga < satu);
    assert!(!body.contains("Dua"));
}

#[tokio::test]
async fn test_feed_failure() {
    let (status, body) = get(ProbeFeed::failing(), "/").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Terjadi Kesalahan"));
    assert!(body.contains("Coba Lagi"));

    let (status, _) = get(ProbeFeed::failing(), "/api/articles").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_empty_feed() {
    for uri in ["/", "/old-articles", "/tag?tag=Kajian"] {
        let (status, body) = get(ProbeFeed::ok(vec![]), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(body.contains("Tidak ada artikel"), "{}", uri);
        assert!(!body.contains("loadMoreBtn"), "{}", uri);
        assert!(!body.contains("load-more-btn"), "{}", uri);
    }
}

#[tokio::test]
async fn test_json_api() {
    let (status, body) = get(ProbeFeed::ok(sample_feed()), "/api/articles").await;
    assert_eq!(status, StatusCode::OK);
    let articles: Vec<Article> = serde_json::from_str(&body).unwrap();
    let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);

    let (_, body) = get(ProbeFeed::ok(sample_feed()), "/api/tags").await;
    let tags: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(tags, vec!["Kajian", "Teknologi", "kajian"]);
}

#[tokio::test]
async fn test_health_and_fallback() {
    let (status, body) = get(ProbeFeed::ok(vec![]), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, _) = get(ProbeFeed::ok(vec![]), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
