#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use naimat_exporter::config::{extract_config, ConfigV1};
use naimat_exporter::gateway::Gateway;
use naimat_exporter::routes::{create_gateway_router, create_router};
use naimat_exporter::startup::build_state;

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
exporter:
  bind_address: 127.0.0.1:8085
  seed: 2024
gateway:
  bind_address: 127.0.0.1:8000
  greeting: "Hello, World!"
"#;

pub fn load_config(yaml: &str) -> ConfigV1 {
    extract_config(&Figment::new().merge(Yaml::string(yaml)))
        .expect("Failed to parse test config YAML")
}

pub fn load_test_config() -> ConfigV1 {
    load_config(TEST_CONFIG)
}

pub fn build_exporter(config: ConfigV1) -> Router {
    let state = build_state(Arc::new(config)).expect("state should build");
    create_router(state)
}

pub fn build_gateway(config: ConfigV1) -> Router {
    let gateway = Gateway::from_config(&config.gateway).expect("gateway should build");
    let state = build_state(Arc::new(config)).expect("state should build");
    create_gateway_router(state, &gateway)
}

pub fn request(path: &str, method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Expected `(name, lo, hi, precision)` of the built-in gauges, in order.
pub const GAUGE_BOUNDS: [(&str, f64, f64, Option<usize>); 7] = [
    ("meals_received", 100.0, 200.0, None),
    ("claims_made", 10.0, 50.0, None),
    ("avg_receive_time_seconds", 800.0, 1500.0, None),
    ("meals_saved", 100.0, 250.0, None),
    ("food_donated_kg", 30.0, 50.0, Some(2)),
    ("donations_made_week", 5.0, 15.0, None),
    ("avg_pickup_time_hours", 0.5, 2.5, Some(2)),
];

/// Checks one exposition body against the built-in gauge table.
pub fn assert_valid_exposition(body: &str) {
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), GAUGE_BOUNDS.len() * 3, "unexpected body:\n{}", body);

    for (block, (name, lo, hi, precision)) in lines.chunks(3).zip(GAUGE_BOUNDS.iter()) {
        assert!(block[0].starts_with(&format!("# HELP {} ", name)), "{}", block[0]);
        assert_eq!(block[1], format!("# TYPE {} gauge", name));

        let raw = block[2]
            .strip_prefix(&format!("{} ", name))
            .unwrap_or_else(|| panic!("value line for {} missing: {}", name, block[2]));
        match precision {
            None => {
                let value: i64 = raw.parse().unwrap_or_else(|_| panic!("{} is not an int", raw));
                assert!((*lo as i64..=*hi as i64).contains(&value), "{} = {}", name, value);
            }
            Some(digits) => {
                let (_, fraction) = raw.split_once('.').expect("float has a decimal point");
                assert_eq!(fraction.len(), *digits, "{} = {}", name, raw);
                let value: f64 = raw.parse().expect("float parses");
                assert!(*lo <= value && value <= *hi, "{} = {}", name, value);
            }
        }
    }
}
