//! The built-in meal-rescue and food-donation gauges.

use super::generator::GeneratorPolicy;
use super::registry::GaugeSpec;

/// The default gauges, in exposition order.
pub fn default_gauges() -> Vec<GaugeSpec> {
    vec![
        GaugeSpec::new(
            "meals_received",
            "Total number of meals received",
            GeneratorPolicy::uniform_int(100, 200),
        ),
        GaugeSpec::new(
            "claims_made",
            "Total number of claims made",
            GeneratorPolicy::uniform_int(10, 50),
        ),
        GaugeSpec::new(
            "avg_receive_time_seconds",
            "Average time to receive meal (in seconds)",
            GeneratorPolicy::uniform_int(800, 1500),
        ),
        GaugeSpec::new(
            "meals_saved",
            "Total number of meals saved",
            GeneratorPolicy::uniform_int(100, 250),
        ),
        GaugeSpec::new(
            "food_donated_kg",
            "Total food donated (kg)",
            GeneratorPolicy::uniform_float(30.0, 50.0, 2),
        ),
        GaugeSpec::new(
            "donations_made_week",
            "Donations made this week",
            GeneratorPolicy::uniform_int(5, 15),
        ),
        GaugeSpec::new(
            "avg_pickup_time_hours",
            "Average pickup time in hours",
            GeneratorPolicy::uniform_float(0.5, 2.5, 2),
        ),
    ]
}
