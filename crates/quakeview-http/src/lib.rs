//! quakeview-http — the two HTTP surfaces over the record pipeline.
//!
//! `GET /api/earthquakes` serves the normalised records as JSON;
//! `GET /` renders them as an HTML board. Both share one [`AppState`] built
//! once at startup and read-only thereafter, and both run the same
//! fetch → normalize pipeline per request.

pub mod render;
pub mod routes;

use quakeview_feeds::RecordSource;
use std::sync::Arc;

/// Startup wiring shared by all handlers. Constructed once; never mutated.
pub struct AppState {
    /// Where raw records come from. Fetched fresh per request.
    pub source: Arc<dyn RecordSource>,
    /// Inclusive magnitude threshold for the filter.
    pub min_magnitude: f64,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(routes::home))
        .route("/api/earthquakes", axum::routing::get(routes::api_earthquakes))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "quakeview listening");
    axum::serve(listener, router(Arc::new(state))).await?;
    Ok(())
}
