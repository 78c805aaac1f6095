//! HTTP API data structures.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error_handling::ValidationError;
use crate::inspect::Inspector;
use crate::render::PageRenderer;

/// Shared state for the HTTP API
#[derive(Clone)]
pub struct ServerState {
    pub inspector: Inspector,
    /// Backend for `/render-title`; the endpoint answers 503 without one.
    pub renderer: Option<Arc<dyn PageRenderer>>,
}

impl ServerState {
    pub fn new(inspector: Inspector) -> Self {
        Self {
            inspector,
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn PageRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }
}

/// Body of `/check-domain` and `/check-sitemap`
#[derive(Debug, Deserialize)]
pub struct DomainRequest {
    pub domain: String,
}

/// Body of `/fetch-sitemap-urls`
#[derive(Debug, Deserialize)]
pub struct SitemapUrlsRequest {
    pub sitemap_url: String,
}

/// Body of `/check-url`
#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

/// JSON response for `/`
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// JSON response for `/render-title`
#[derive(Debug, Serialize)]
pub struct RenderTitleResponse {
    pub page_title: String,
}

/// A request the API could not answer with a report.
///
/// Rendered as `{"detail": "<message>"}` with a matching status code.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request named a URL that cannot be inspected.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("no page renderer is configured")]
    RendererUnavailable,

    #[error("page rendering failed: {0:#}")]
    RenderFailed(anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RendererUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::RenderFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
