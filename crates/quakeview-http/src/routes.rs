//! Request handlers.
//!
//! Both handlers run the same per-request pipeline: fetch raw records from
//! the configured source, normalise and filter them, serialise. Any
//! [`FeedError`] surfaces uniformly as a 500 with a `detail` message and a
//! machine-readable `kind`; excluded records never produce an error.

use crate::{render, AppState};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use quakeview_core::{normalizer, FeedError, NormalizedRecord};
use serde::Serialize;
use std::sync::Arc;

/// Success body of `GET /api/earthquakes`.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: &'static str,
    pub data: Vec<NormalizedRecord>,
}

/// `GET /api/earthquakes` — normalised records as JSON.
pub async fn api_earthquakes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, ApiError> {
    let records = fetch_filtered(&state).await?;
    Ok(Json(ApiResponse { status: "success", data: records }))
}

/// `GET /` — normalised records as an HTML board.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let records = fetch_filtered(&state).await?;
    Ok(Html(render::page(&records)))
}

async fn fetch_filtered(state: &AppState) -> Result<Vec<NormalizedRecord>, ApiError> {
    let raw = state.source.fetch().await?;
    Ok(normalizer::normalize(&raw, state.min_magnitude))
}

/// Request-boundary wrapper turning a [`FeedError`] into a 500 response.
#[derive(Debug)]
pub struct ApiError(pub FeedError);

impl From<FeedError> for ApiError {
    fn from(err: FeedError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.0.kind(), error = %self.0, "request failed");
        let body = serde_json::json!({
            "detail": self.0.to_string(),
            "kind": self.0.kind(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
