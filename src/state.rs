//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! the configuration and the scraper owning the gauge registry.

use crate::config::ConfigV1;
use crate::metrics::Scraper;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler; the scraper is passed in
/// explicitly rather than living in a global.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Gauge registry plus random source, regenerated on every scrape.
    pub scraper: Arc<Scraper>,
}
