//! Metrics exposition endpoint.

use crate::metrics::CONTENT_TYPE;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::{debug, error};

/// Creates the metrics route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}

/// Handler for the /metrics endpoint.
///
/// Regenerates every gauge and returns the fresh values in Prometheus text
/// format. A registry failure is a defect, so the scrape fails with a 500
/// instead of serving stale values.
async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, HTTPError> {
    let metrics_text = state.scraper.scrape().map_err(|e| {
        error!(error = %e, "Scrape failed, refusing to serve stale gauges");
        HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate metrics")
    })?;
    debug!(bytes = metrics_text.len(), "Served scrape");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE)],
        metrics_text,
    ))
}
