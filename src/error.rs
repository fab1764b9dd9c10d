//! Errors that stop the service from starting or serving.

use thiserror::Error;

use crate::metrics::MetricsError;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The gauge registry or random source could not be built.
    #[error("metrics error: {0}")]
    Metrics(#[from] MetricsError),

    /// The gateway route sets are misconfigured.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// The log subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),

    /// A listener could not be bound or a server failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
