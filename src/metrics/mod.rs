//! Gauge synthesis and exposition.
//!
//! The registry owns the fixed set of gauges, the generator module turns a
//! policy plus a random source into a fresh value, and the scraper ties both
//! together behind a single lock so every rendered snapshot belongs to one
//! generation.

mod catalog;
mod error;
pub mod exposition;
mod generator;
mod registry;
mod scrape;

pub use catalog::default_gauges;
pub use error::MetricsError;
pub use exposition::CONTENT_TYPE;
pub use generator::GeneratorPolicy;
pub use registry::{GaugeSpec, MetricRegistry, Sample, Snapshot};
pub use scrape::{seeded_source, Scraper};
