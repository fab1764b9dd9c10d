//! Application startup and server initialization.
//!
//! This module builds the gauge registry and its random source from the
//! configuration, then binds the exporter and (optionally) the gateway
//! listeners and serves both until one of them fails.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::metrics::{seeded_source, MetricRegistry, Scraper};
use crate::routes;
use crate::state::AppState;

/// Builds the shared state: the registry of configured gauges and the
/// random source used to regenerate them.
///
/// # Errors
///
/// Returns an error on duplicate or malformed gauges, or if the random
/// source cannot be seeded.
pub fn build_state(config: Arc<ConfigV1>) -> Result<AppState> {
    let registry = MetricRegistry::from_specs(config.exporter.gauges.iter().cloned())?;
    let rng = seeded_source(config.exporter.seed)?;

    info!(
        gauges = registry.len(),
        seeded = config.exporter.seed.is_some(),
        "Gauge registry ready"
    );

    Ok(AppState {
        config,
        scraper: Arc::new(Scraper::new(registry, rng)),
    })
}

/// Initializes and runs the application servers.
///
/// # Errors
///
/// Returns an error if the state or the gateway cannot be built, a listener
/// fails to bind to its configured address, or a server stops with an I/O
/// error. Configuration errors are reported before anything is bound.
pub async fn run(config: Arc<ConfigV1>) -> Result<()> {
    let state = build_state(config.clone())?;
    let gateway = if config.gateway.enabled {
        Some(Gateway::from_config(&config.gateway)?)
    } else {
        None
    };

    let exporter_listener = TcpListener::bind(&config.exporter.bind_address).await?;
    info!(
        "Starting metrics exporter on {}",
        config.exporter.bind_address
    );
    let exporter_app = routes::create_router(state.clone());
    let exporter = async move { axum::serve(exporter_listener, exporter_app).await };

    let Some(gateway) = gateway else {
        info!("Inference gateway is disabled");
        exporter.await?;
        return Ok(());
    };

    let gateway_listener = TcpListener::bind(&config.gateway.bind_address).await?;
    info!(
        route_sets = ?gateway.route_set_names(),
        "Starting inference gateway on {}",
        config.gateway.bind_address
    );
    let gateway_app = routes::create_gateway_router(state, &gateway);
    let gateway_server = async move { axum::serve(gateway_listener, gateway_app).await };

    tokio::try_join!(exporter, gateway_server)?;
    Ok(())
}
