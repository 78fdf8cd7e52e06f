use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use pin_core::Result;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::home))
        .route("/index.html", get(handlers::home))
        .route("/article", get(handlers::article))
        .route("/article.html", get(handlers::article))
        .route("/tag", get(handlers::tag))
        .route("/tag.html", get(handlers::tag))
        .route("/old-articles", get(handlers::old_articles))
        .route("/old-articles.html", get(handlers::old_articles))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/tags", get(handlers::list_tags))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let feed = state.feed.describe();
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Serving news pages on http://{} (feed: {})", listener.local_addr()?, feed);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use pin_core::{Article, Error, Result};
}
