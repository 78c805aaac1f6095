//! Inspection handlers.
//!
//! Every report is returned with 200, whatever happened to the inspected
//! resource. Only an invalid page URL is an error response.

use axum::extract::State;
use axum::Json;

use super::super::types::{ApiError, DomainRequest, ServerState, SitemapUrlsRequest, UrlRequest};
use crate::inspect::{DomainReport, PageReport, SitemapReport, SitemapUrlsReport};

/// `POST /check-domain`
pub async fn check_domain_handler(
    State(state): State<ServerState>,
    Json(request): Json<DomainRequest>,
) -> Json<DomainReport> {
    Json(state.inspector.check_domain(&request.domain).await)
}

/// `POST /check-sitemap`
pub async fn check_sitemap_handler(
    State(state): State<ServerState>,
    Json(request): Json<DomainRequest>,
) -> Json<SitemapReport> {
    Json(state.inspector.check_sitemap(&request.domain).await)
}

/// `POST /fetch-sitemap-urls`
pub async fn fetch_sitemap_urls_handler(
    State(state): State<ServerState>,
    Json(request): Json<SitemapUrlsRequest>,
) -> Json<SitemapUrlsReport> {
    Json(state.inspector.fetch_sitemap_urls(&request.sitemap_url).await)
}

/// `POST /check-url`
pub async fn check_url_handler(
    State(state): State<ServerState>,
    Json(request): Json<UrlRequest>,
) -> Result<Json<PageReport>, ApiError> {
    let report = state.inspector.check_url(&request.url).await?;
    Ok(Json(report))
}
