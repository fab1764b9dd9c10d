//! Generator policies and the value synthesizer.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::registry::Sample;

/// Largest number of decimal digits a float policy may round to.
pub const MAX_PRECISION: u32 = 9;

/// Tolerance used when snapping a scaled bound onto the decimal grid.
const GRID_EPSILON: f64 = 1e-9;

/// Largest scaled bound (2^53) for which every grid step is an exact `f64`
/// and fits an `i64` without saturating.
const MAX_GRID_STEPS: f64 = 9_007_199_254_740_992.0;

/// The rule used to synthesize a gauge value on every scrape.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum GeneratorPolicy {
    /// An integer drawn uniformly from `[lo, hi]`, both ends inclusive.
    #[serde(rename = "uniform_int")]
    UniformInt { lo: i64, hi: i64 },

    /// A float drawn uniformly from `[lo, hi]` and rounded to `precision`
    /// decimal digits.
    #[serde(rename = "uniform_float")]
    UniformFloat { lo: f64, hi: f64, precision: u32 },
}

impl GeneratorPolicy {
    pub fn uniform_int(lo: i64, hi: i64) -> Self {
        GeneratorPolicy::UniformInt { lo, hi }
    }

    pub fn uniform_float(lo: f64, hi: f64, precision: u32) -> Self {
        GeneratorPolicy::UniformFloat { lo, hi, precision }
    }

    /// Number of decimal digits a rendered value carries, if any.
    pub fn precision(&self) -> Option<u32> {
        match self {
            GeneratorPolicy::UniformInt { .. } => None,
            GeneratorPolicy::UniformFloat { precision, .. } => Some(*precision),
        }
    }

    /// Checks that the policy can always produce a value inside its bounds.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            GeneratorPolicy::UniformInt { lo, hi } => {
                if lo > hi {
                    return Err(format!("lower bound {} exceeds upper bound {}", lo, hi));
                }
                Ok(())
            }
            GeneratorPolicy::UniformFloat { lo, hi, precision } => {
                if !lo.is_finite() || !hi.is_finite() {
                    return Err("bounds must be finite".to_string());
                }
                if lo > hi {
                    return Err(format!("lower bound {} exceeds upper bound {}", lo, hi));
                }
                if precision > MAX_PRECISION {
                    return Err(format!(
                        "precision {} exceeds the maximum of {}",
                        precision, MAX_PRECISION
                    ));
                }
                if !(hi - lo).is_finite() {
                    return Err(format!("range [{}, {}] is too wide to sample", lo, hi));
                }
                let scale = scale(precision);
                if lo.abs() * scale > MAX_GRID_STEPS || hi.abs() * scale > MAX_GRID_STEPS {
                    return Err(format!(
                        "bounds [{}, {}] are too large for {} decimal digits",
                        lo, hi, precision
                    ));
                }
                let (lo_steps, hi_steps) = grid_bounds(lo, hi, precision);
                if lo_steps > hi_steps {
                    return Err(format!(
                        "no value with {} decimal digits lies in [{}, {}]",
                        precision, lo, hi
                    ));
                }
                Ok(())
            }
        }
    }

    /// Draws a new value for this policy.
    ///
    /// Floats are rounded half away from zero and then clamped onto the
    /// decimal grid inside `[lo, hi]`, so rounding never escapes the bounds.
    /// The policy is expected to have passed [`GeneratorPolicy::validate`].
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        match *self {
            GeneratorPolicy::UniformInt { lo, hi } => Sample::Int(rng.gen_range(lo..=hi)),
            GeneratorPolicy::UniformFloat { lo, hi, precision } => {
                let raw: f64 = rng.gen_range(lo..=hi);
                Sample::Float(round_to_grid(raw, lo, hi, precision))
            }
        }
    }
}

fn scale(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

/// Smallest and largest multiples of `10^-precision` inside `[lo, hi]`,
/// expressed as a number of grid steps.
fn grid_bounds(lo: f64, hi: f64, precision: u32) -> (i64, i64) {
    let scale = scale(precision);
    let lo_scaled = lo * scale;
    let hi_scaled = hi * scale;

    let lo_steps = if (lo_scaled - lo_scaled.round()).abs() < GRID_EPSILON {
        lo_scaled.round()
    } else {
        lo_scaled.ceil()
    };
    let hi_steps = if (hi_scaled - hi_scaled.round()).abs() < GRID_EPSILON {
        hi_scaled.round()
    } else {
        hi_scaled.floor()
    };

    (lo_steps as i64, hi_steps as i64)
}

fn round_to_grid(raw: f64, lo: f64, hi: f64, precision: u32) -> f64 {
    let scale = scale(precision);
    let (lo_steps, hi_steps) = grid_bounds(lo, hi, precision);
    let steps = ((raw * scale).round() as i64).clamp(lo_steps, hi_steps);
    steps as f64 / scale
}
