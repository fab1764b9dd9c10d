use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for the inference gateway listener.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct GatewayConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Message returned by `GET /`.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_route_sets")]
    pub route_sets: Vec<RouteSetConfig>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            enabled: default_enabled(),
            bind_address: default_bind_address(),
            greeting: default_greeting(),
            route_sets: default_route_sets(),
        }
    }
}

/// The route sets the gateway knows how to mount. We differentiate them via a
/// "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(tag = "type")]
pub enum RouteSetConfig {
    #[serde(rename = "upload-image")]
    UploadImage(RouteSetOptions),
    #[serde(rename = "predict-expiry")]
    PredictExpiry(RouteSetOptions),
    #[serde(rename = "categorize-food")]
    CategorizeFood(RouteSetOptions),
}

/// Options shared by every route set.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct RouteSetOptions {
    /// Overrides the default mount path.
    #[serde(default)]
    pub path: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_greeting() -> String {
    "Hello, World!".to_string()
}

fn default_route_sets() -> Vec<RouteSetConfig> {
    vec![
        RouteSetConfig::UploadImage(RouteSetOptions::default()),
        RouteSetConfig::PredictExpiry(RouteSetOptions::default()),
        RouteSetConfig::CategorizeFood(RouteSetOptions::default()),
    ]
}
