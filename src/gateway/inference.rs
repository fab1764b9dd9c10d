//! Placeholder route sets for the inference endpoints.
//!
//! The inference handlers live outside this service. Until one is plugged in,
//! each route answers `501 Not Implemented` naming the route set.

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tracing::warn;

use super::RouteSet;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Static description of one inference endpoint.
#[derive(Debug)]
pub struct InferenceEndpoint {
    pub name: &'static str,
    pub default_path: &'static str,
}

pub const UPLOAD_IMAGE: InferenceEndpoint = InferenceEndpoint {
    name: "upload-image",
    default_path: "/upload-image",
};

pub const PREDICT_EXPIRY: InferenceEndpoint = InferenceEndpoint {
    name: "predict-expiry",
    default_path: "/predict-expiry",
};

pub const CATEGORIZE_FOOD: InferenceEndpoint = InferenceEndpoint {
    name: "categorize-food",
    default_path: "/categorize-food",
};

/// Mounts a single `POST` route for an inference endpoint.
pub struct InferenceRouteSet {
    name: &'static str,
    path: String,
}

impl InferenceRouteSet {
    pub fn new(endpoint: &InferenceEndpoint, path: Option<String>) -> Self {
        InferenceRouteSet {
            name: endpoint.name,
            path: path.unwrap_or_else(|| endpoint.default_path.to_string()),
        }
    }
}

impl RouteSet for InferenceRouteSet {
    fn get_name(&self) -> &str {
        self.name
    }

    fn paths(&self) -> Vec<String> {
        vec![self.path.clone()]
    }

    fn mount(&self, router: Router<AppState>) -> Router<AppState> {
        let name = self.name;
        router.route(&self.path, post(move || not_implemented(name)))
    }
}

async fn not_implemented(name: &'static str) -> HTTPError {
    warn!(route_set = name, "Inference handler is not available");
    HTTPError::new(
        StatusCode::NOT_IMPLEMENTED,
        format!("{} inference is not available in this deployment", name),
    )
}
