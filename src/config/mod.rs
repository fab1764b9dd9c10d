// This module re-exports important pieces for convenience,
// so we can "use crate::config::*" easily.
pub mod exporter;
pub mod gateway;
pub mod logging;
pub mod types;

pub use exporter::*;
pub use gateway::*;
pub use logging::*;
pub use types::*;
