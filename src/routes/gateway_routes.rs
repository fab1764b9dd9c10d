//! Gateway root endpoint.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

/// Registers the gateway root route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}

/// Returns the configured greeting as `{"message": ...}`.
async fn greeting(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "message": state.config.gateway.greeting }))
}
