//! Prometheus text exposition rendering.

use super::generator::GeneratorPolicy;
use super::registry::{Sample, Snapshot};

/// Content type of the Prometheus text format, version 0.0.4.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Renders a snapshot as one `HELP`/`TYPE`/value block per gauge, keeping
/// the snapshot's order.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(snapshot.len() * 96);
    for (spec, value) in snapshot {
        out.push_str(&format!("# HELP {} {}\n", spec.name, escape_help(&spec.help)));
        out.push_str(&format!("# TYPE {} gauge\n", spec.name));
        out.push_str(&format!(
            "{} {}\n",
            spec.name,
            format_value(*value, &spec.generator)
        ));
    }
    out
}

/// Integers render bare, floats with exactly the policy's precision.
fn format_value(value: Option<Sample>, policy: &GeneratorPolicy) -> String {
    match value {
        None => "NaN".to_string(),
        Some(Sample::Int(v)) => v.to_string(),
        Some(Sample::Float(v)) => match policy.precision() {
            Some(precision) => format!("{:.*}", precision as usize, v),
            None => v.to_string(),
        },
    }
}

fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}
