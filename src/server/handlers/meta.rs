//! Liveness and rendering handlers.

use axum::extract::State;
use axum::Json;

use super::super::types::{ApiError, RenderTitleResponse, RootResponse, ServerState};

/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "SEO backend is running",
    })
}

/// `GET /render-title`
pub async fn render_title_handler(
    State(state): State<ServerState>,
) -> Result<Json<RenderTitleResponse>, ApiError> {
    let renderer = state.renderer.ok_or(ApiError::RendererUnavailable)?;
    let page_title = renderer.render_page_title().await.map_err(|e| {
        log::warn!("Page rendering failed: {e:#}");
        ApiError::RenderFailed(e)
    })?;
    Ok(Json(RenderTitleResponse { page_title }))
}
