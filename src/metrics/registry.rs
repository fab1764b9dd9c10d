//! The owned table of gauges and their current values.

use std::collections::HashMap;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::MetricsError;
use super::generator::GeneratorPolicy;

/// Static description of one gauge.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub name: String,
    pub help: String,
    pub generator: GeneratorPolicy,
}

impl GaugeSpec {
    pub fn new(name: impl Into<String>, help: impl Into<String>, generator: GeneratorPolicy) -> Self {
        GaugeSpec {
            name: name.into(),
            help: help.into(),
            generator,
        }
    }
}

/// A generated gauge value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Int(i64),
    Float(f64),
}

/// Ordered `(spec, value)` pairs taken at one instant.
///
/// `None` marks a gauge that has not been generated yet.
pub type Snapshot = Vec<(Arc<GaugeSpec>, Option<Sample>)>;

struct Entry {
    spec: Arc<GaugeSpec>,
    current: Option<Sample>,
}

/// Registry of gauges in declaration order.
///
/// Names are fixed once startup registration is over; nothing here removes an
/// entry.
#[derive(Default)]
pub struct MetricRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from specs, keeping their order.
    pub fn from_specs<I>(specs: I) -> Result<Self, MetricsError>
    where
        I: IntoIterator<Item = GaugeSpec>,
    {
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec)?;
        }
        Ok(registry)
    }

    /// Adds a gauge after checking its name and generator policy.
    pub fn register(&mut self, spec: GaugeSpec) -> Result<(), MetricsError> {
        if !is_valid_metric_name(&spec.name) {
            return Err(MetricsError::InvalidName(spec.name));
        }
        if self.index.contains_key(&spec.name) {
            return Err(MetricsError::DuplicateName(spec.name));
        }
        if let Err(reason) = spec.generator.validate() {
            return Err(MetricsError::InvalidPolicy {
                name: spec.name,
                reason,
            });
        }

        self.index.insert(spec.name.clone(), self.entries.len());
        self.entries.push(Entry {
            spec: Arc::new(spec),
            current: None,
        });
        Ok(())
    }

    /// Overwrites the current value of `name`.
    pub fn set(&mut self, name: &str, value: Sample) -> Result<(), MetricsError> {
        let position = self.position(name)?;
        self.entries[position].current = Some(value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Option<Sample>, MetricsError> {
        let position = self.position(name)?;
        Ok(self.entries[position].current)
    }

    /// Returns every gauge with its current value, in declaration order.
    pub fn snapshot_all(&self) -> Snapshot {
        self.entries
            .iter()
            .map(|entry| (entry.spec.clone(), entry.current))
            .collect()
    }

    pub fn specs(&self) -> impl Iterator<Item = &Arc<GaugeSpec>> {
        self.entries.iter().map(|entry| &entry.spec)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.spec.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Result<usize, MetricsError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| MetricsError::UnknownMetric(name.to_string()))
    }
}

/// Metric names follow `[a-zA-Z_:][a-zA-Z0-9_:]*`.
fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> GaugeSpec {
        GaugeSpec::new(name, "help", GeneratorPolicy::uniform_int(0, 10))
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut registry = MetricRegistry::new();
        registry.register(spec("meals_saved")).expect("first registration");

        let err = registry.register(spec("meals_saved")).unwrap_err();
        assert!(matches!(err, MetricsError::DuplicateName(name) if name == "meals_saved"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_rejects_invalid_names() {
        let mut registry = MetricRegistry::new();
        for name in ["", "1meals", "meals-saved", "meals saved"] {
            let err = registry.register(spec(name)).unwrap_err();
            assert!(matches!(err, MetricsError::InvalidName(_)), "accepted '{}'", name);
        }
        assert!(registry.register(spec("_ns:meals_saved")).is_ok());
    }

    #[test]
    fn register_rejects_invalid_policies() {
        let mut registry = MetricRegistry::new();
        let bad = GaugeSpec::new("claims_made", "help", GeneratorPolicy::uniform_int(50, 10));
        let err = registry.register(bad).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidPolicy { name, .. } if name == "claims_made"));
        assert!(registry.is_empty());
    }

    #[test]
    fn set_and_get_unknown_names_fail() {
        let mut registry = MetricRegistry::new();
        registry.register(spec("claims_made")).unwrap();

        assert!(matches!(
            registry.set("meals_received", Sample::Int(1)),
            Err(MetricsError::UnknownMetric(_))
        ));
        assert!(matches!(
            registry.get("meals_received"),
            Err(MetricsError::UnknownMetric(_))
        ));
    }

    #[test]
    fn values_start_undefined_and_are_overwritten() {
        let mut registry = MetricRegistry::new();
        registry.register(spec("claims_made")).unwrap();
        assert_eq!(registry.get("claims_made").unwrap(), None);

        registry.set("claims_made", Sample::Int(12)).unwrap();
        registry.set("claims_made", Sample::Int(31)).unwrap();
        assert_eq!(registry.get("claims_made").unwrap(), Some(Sample::Int(31)));
    }

    #[test]
    fn snapshot_keeps_declaration_order() {
        let names = ["zeta", "alpha", "mid"];
        let mut registry = MetricRegistry::from_specs(names.iter().map(|n| spec(n))).unwrap();
        registry.set("alpha", Sample::Int(4)).unwrap();

        let snapshot = registry.snapshot_all();
        let order: Vec<&str> = snapshot.iter().map(|(s, _)| s.name.as_str()).collect();
        assert_eq!(order, names);
        assert_eq!(snapshot[1].1, Some(Sample::Int(4)));
        assert_eq!(registry.names(), names);
    }
}
