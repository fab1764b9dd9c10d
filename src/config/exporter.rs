use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::{default_gauges, GaugeSpec};

/// Settings for the metrics exporter listener and its gauges.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ExporterConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Fixed seed for the value generator. Leave unset to seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Gauges in exposition order. Defaults to the built-in catalogue.
    #[serde(default = "default_gauges")]
    pub gauges: Vec<GaugeSpec>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        ExporterConfig {
            bind_address: default_bind_address(),
            seed: None,
            gauges: default_gauges(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8085".to_string()
}
