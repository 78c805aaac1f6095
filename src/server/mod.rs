//! HTTP API.
//!
//! Endpoints:
//! - `GET /` - liveness message
//! - `POST /check-domain`, `POST /check-sitemap`, `POST /fetch-sitemap-urls`,
//!   `POST /check-url` - the inspection pipelines, JSON in and out
//! - `GET /render-title` - browser rendering, when a renderer is configured

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::app::shutdown_signal;
use crate::error_handling::InitializationError;
use handlers::{
    check_domain_handler, check_sitemap_handler, check_url_handler, fetch_sitemap_urls_handler,
    render_title_handler, root_handler,
};
pub use types::{ApiError, DomainRequest, ServerState, SitemapUrlsRequest, UrlRequest};

/// Builds the API router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/check-domain", post(check_domain_handler))
        .route("/check-sitemap", post(check_sitemap_handler))
        .route("/fetch-sitemap-urls", post(fetch_sitemap_urls_handler))
        .route("/check-url", post(check_url_handler))
        .route("/render-title", get(render_title_handler))
        .with_state(state)
}

/// Serves the API on `bind` until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns `InitializationError::ServerError` if the address cannot be bound
/// or the server fails.
pub async fn serve(bind: &str, state: ServerState) -> Result<(), InitializationError> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    let local = listener.local_addr()?;

    log::info!("SEO inspector listening on http://{local}/");
    log::info!("  - Domain check: POST http://{local}/check-domain");
    log::info!("  - Sitemap check: POST http://{local}/check-sitemap");
    log::info!("  - Sitemap URLs: POST http://{local}/fetch-sitemap-urls");
    log::info!("  - Page check: POST http://{local}/check-url");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}
