//! HTTP route definitions and handlers.
//!
//! The exporter serves scrape and health routes. The gateway serves its
//! greeting plus whatever route sets were attached to it.

mod gateway_routes;
mod health_routes;
mod metrics;

use crate::gateway::Gateway;
use crate::state::AppState;
use axum::Router;

/// Creates the exporter router with the metrics and health routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(metrics::routes())
        .merge(health_routes::routes())
        .with_state(state)
}

/// Creates the gateway router: the greeting route, then every route set
/// attached to `gateway`.
pub fn create_gateway_router(state: AppState, gateway: &Gateway) -> Router {
    let router = Router::new()
        .merge(gateway_routes::routes())
        .merge(health_routes::routes());
    gateway.mount_all(router).with_state(state)
}
