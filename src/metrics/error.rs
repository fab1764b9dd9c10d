//! Error taxonomy for the gauge registry and value synthesis.

use thiserror::Error;

/// Errors raised while building the registry or regenerating gauge values.
///
/// Every variant is either a startup failure or a programming defect; none of
/// them describe a condition a scraper can fix by retrying.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// A gauge with the same name was registered twice.
    #[error("gauge '{0}' is already registered")]
    DuplicateName(String),

    /// A value was read or written for a gauge that was never registered.
    #[error("gauge '{0}' is not registered")]
    UnknownMetric(String),

    /// The gauge name does not follow the Prometheus metric name grammar.
    #[error("invalid gauge name '{0}'")]
    InvalidName(String),

    /// The generator policy cannot produce a value inside its own bounds.
    #[error("invalid generator policy for gauge '{name}': {reason}")]
    InvalidPolicy { name: String, reason: String },

    /// The operating system random source could not seed the generator.
    #[error("failed to seed random source: {0}")]
    RandomSource(#[from] rand::Error),
}
