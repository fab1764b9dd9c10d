//! Regenerate-then-render cycle served on every scrape.

use std::sync::Mutex;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use tracing::debug;

use super::error::MetricsError;
use super::exposition;
use super::registry::{MetricRegistry, Snapshot};

/// Builds the random source: deterministic when `seed` is set, otherwise
/// seeded from the operating system.
pub fn seeded_source(seed: Option<u64>) -> Result<Box<dyn RngCore + Send>, MetricsError> {
    match seed {
        Some(seed) => Ok(Box::new(StdRng::seed_from_u64(seed))),
        None => Ok(Box::new(StdRng::from_rng(OsRng)?)),
    }
}

struct ScrapeState {
    registry: MetricRegistry,
    rng: Box<dyn RngCore + Send>,
}

/// Owns the registry and the random source shared by all scrape requests.
///
/// Regeneration and snapshotting happen under one lock, so concurrent scrapes
/// never serve a mix of values from different generations. Rendering runs on
/// the owned snapshot after the lock is released.
pub struct Scraper {
    state: Mutex<ScrapeState>,
}

impl Scraper {
    pub fn new(registry: MetricRegistry, rng: Box<dyn RngCore + Send>) -> Self {
        Scraper {
            state: Mutex::new(ScrapeState { registry, rng }),
        }
    }

    /// Regenerates every gauge and renders the result in exposition format.
    pub fn scrape(&self) -> Result<String, MetricsError> {
        let snapshot = self.regenerate()?;
        Ok(exposition::render(&snapshot))
    }

    /// Draws a fresh value for every gauge in declaration order and returns
    /// the snapshot of that generation.
    pub fn regenerate(&self) -> Result<Snapshot, MetricsError> {
        let mut guard = self.state.lock().expect("scrape state mutex poisoned");
        let ScrapeState { registry, rng } = &mut *guard;

        let specs: Vec<_> = registry.specs().cloned().collect();
        for spec in &specs {
            let value = spec.generator.synthesize(rng.as_mut());
            registry.set(&spec.name, value)?;
        }

        debug!(gauges = specs.len(), "Regenerated gauge values");
        Ok(registry.snapshot_all())
    }

    /// Returns the current snapshot without regenerating.
    pub fn snapshot(&self) -> Snapshot {
        self.state
            .lock()
            .expect("scrape state mutex poisoned")
            .registry
            .snapshot_all()
    }

    pub fn gauge_count(&self) -> usize {
        self.state
            .lock()
            .expect("scrape state mutex poisoned")
            .registry
            .len()
    }
}
