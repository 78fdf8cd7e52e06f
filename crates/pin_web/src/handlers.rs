use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use pin_core::{Article, Error, Result, SiteConfig};
use pin_listing::views::{ArchiveView, DetailView, HomeView, TagView};
use pin_listing::{discover_tags, page_param, required_param, sort_newest_first};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::AppState;

/// Every page reads from the same handful of query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub id: Option<String>,
    pub tag: Option<String>,
}

pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let page = page_param(query.page.as_deref());
    let view = state
        .feed
        .fetch()
        .await
        .map(|articles| HomeView::build(articles, page, &state.config));

    page_response(state.renderer.home(view.as_ref()), view.as_ref().err())
}

pub async fn article(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let view = match required_param(query.id.as_deref(), "id") {
        Ok(id) => match state.feed.fetch().await {
            Ok(articles) => detail_view(&articles, id, &state.config),
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    page_response(state.renderer.article(view.as_ref()), view.as_ref().err())
}

pub async fn tag(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let requested = required_param(query.tag.as_deref(), "tag").ok();
    let view = match requested {
        Some(tag) => state
            .feed
            .fetch()
            .await
            .map(|articles| TagView::build(&articles, tag)),
        None => Err(Error::MissingParameter("tag")),
    };

    page_response(state.renderer.tag(requested, view.as_ref()), view.as_ref().err())
}

pub async fn old_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let page = page_param(query.page.as_deref());
    let view = state
        .feed
        .fetch()
        .await
        .map(|articles| ArchiveView::build(&articles, Utc::now(), page, &state.config));

    page_response(state.renderer.archive(view.as_ref()), view.as_ref().err())
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Response {
    match state.feed.fetch().await {
        Ok(mut articles) => {
            sort_newest_first(&mut articles);
            Json(articles).into_response()
        }
        Err(e) => json_error(&e),
    }
}

pub async fn list_tags(State(state): State<Arc<AppState>>) -> Response {
    match state.feed.fetch().await {
        Ok(articles) => Json(discover_tags(&articles)).into_response(),
        Err(e) => json_error(&e),
    }
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

fn detail_view(articles: &[Article], id: &str, config: &SiteConfig) -> Result<DetailView> {
    let mut rng = rand::thread_rng();
    DetailView::build(articles, id, config, &mut rng)
}

pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::MissingParameter(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        e if e.is_feed_failure() => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn page_response(rendered: Result<String>, failure: Option<&Error>) -> Response {
    let status = match failure {
        Some(e) => {
            let status = status_for(e);
            if status.is_server_error() {
                error!("❌ Page failed: {}", e);
            } else {
                warn!("⚠️ {}", e);
            }
            status
        }
        None => StatusCode::OK,
    };

    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("❌ Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

fn json_error(error: &Error) -> Response {
    error!("❌ API request failed: {}", error);
    (status_for(error), Json(json!({ "error": error.to_string() }))).into_response()
}
