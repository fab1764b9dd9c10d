//! Library exports for naimat-exporter, shared between the binary and tests.

pub mod config;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod routes;
pub mod startup;
pub mod state;
pub mod utils;
