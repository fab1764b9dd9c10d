//! Inference gateway composition.
//!
//! The gateway owns no inference logic. Each route set is an independently
//! pluggable group of routes implementing [`RouteSet`]; startup attaches them
//! explicitly, in order, onto one application router.

mod inference;

pub use inference::{
    InferenceEndpoint, InferenceRouteSet, CATEGORIZE_FOOD, PREDICT_EXPIRY, UPLOAD_IMAGE,
};

use axum::Router;
use tracing::info;

use crate::config::{GatewayConfig, RouteSetConfig};
use crate::error::{Error, Result};
use crate::state::AppState;

/// Paths served by the gateway itself; route sets may not claim them.
const RESERVED_PATHS: [&str; 2] = ["/", "/health"];

/// A group of routes that can be mounted onto the gateway router.
pub trait RouteSet: Send + Sync {
    fn get_name(&self) -> &str;
    /// Paths this route set will claim once mounted.
    fn paths(&self) -> Vec<String>;
    fn mount(&self, router: Router<AppState>) -> Router<AppState>;
}

/// Create a route set from a given config.
pub fn create_route_set(config: &RouteSetConfig) -> Box<dyn RouteSet> {
    match config {
        RouteSetConfig::UploadImage(options) => {
            Box::new(InferenceRouteSet::new(&UPLOAD_IMAGE, options.path.clone()))
        }
        RouteSetConfig::PredictExpiry(options) => {
            Box::new(InferenceRouteSet::new(&PREDICT_EXPIRY, options.path.clone()))
        }
        RouteSetConfig::CategorizeFood(options) => {
            Box::new(InferenceRouteSet::new(&CATEGORIZE_FOOD, options.path.clone()))
        }
    }
}

/// Ordered collection of attached route sets.
#[derive(Default)]
pub struct Gateway {
    route_sets: Vec<Box<dyn RouteSet>>,
}

impl Gateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gateway with every route set named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a route set claims a path that is malformed,
    /// reserved, or already claimed by an earlier route set.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        config
            .route_sets
            .iter()
            .map(create_route_set)
            .try_fold(Self::new(), Gateway::attach)
    }

    /// Attaches a route set; it is mounted after the ones attached before it.
    pub fn attach(mut self, route_set: Box<dyn RouteSet>) -> Result<Self> {
        for path in route_set.paths() {
            if !path.starts_with('/') {
                return Err(Error::Gateway(format!(
                    "route set '{}' path '{}' must start with '/'",
                    route_set.get_name(),
                    path
                )));
            }
            if RESERVED_PATHS.contains(&path.as_str()) {
                return Err(Error::Gateway(format!(
                    "route set '{}' cannot claim reserved path '{}'",
                    route_set.get_name(),
                    path
                )));
            }
            if let Some(owner) = self
                .route_sets
                .iter()
                .find(|existing| existing.paths().contains(&path))
            {
                return Err(Error::Gateway(format!(
                    "route set '{}' path '{}' is already claimed by '{}'",
                    route_set.get_name(),
                    path,
                    owner.get_name()
                )));
            }
        }
        self.route_sets.push(route_set);
        Ok(self)
    }

    pub fn route_set_names(&self) -> Vec<&str> {
        self.route_sets.iter().map(|rs| rs.get_name()).collect()
    }

    /// Mounts every attached route set onto `router`.
    pub fn mount_all(&self, router: Router<AppState>) -> Router<AppState> {
        self.route_sets.iter().fold(router, |router, route_set| {
            info!(
                route_set = route_set.get_name(),
                paths = ?route_set.paths(),
                "Mounting route set"
            );
            route_set.mount(router)
        })
    }
}
