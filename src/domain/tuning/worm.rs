use serde::{Deserialize, Serialize};

/// Gameplay tuning for worms.
///
/// Keep this separate from runtime configuration (file paths, log format, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WormTuning {
    /// Body density in kg/m³.
    pub density: f64,

    /// Smallest radius a worm may have, in metres.
    pub min_radius: f64,

    /// AP cost of turning a full circle (2π radians).
    pub turn_cost: f64,

    /// AP cost per step when moving horizontally.
    pub horizontal_cost: f64,

    /// AP cost per step when moving vertically.
    pub vertical_cost: f64,

    /// Gravitational acceleration in m/s².
    pub gravity: f64,

    /// Newtons of launch force contributed by each remaining AP.
    pub ap_force: f64,
}

impl Default for WormTuning {
    fn default() -> Self {
        Self {
            density: 1062.0,
            min_radius: 0.25,
            turn_cost: 60.0,
            horizontal_cost: 1.0,
            vertical_cost: 4.0,
            gravity: 9.80665,
            ap_force: 5.0,
        }
    }
}

impl WormTuning {
    /// Returns the name of the first field that is not a positive finite number.
    pub fn invalid_field(&self) -> Option<&'static str> {
        let fields = [
            ("density", self.density),
            ("min_radius", self.min_radius),
            ("turn_cost", self.turn_cost),
            ("horizontal_cost", self.horizontal_cost),
            ("vertical_cost", self.vertical_cost),
            ("gravity", self.gravity),
            ("ap_force", self.ap_force),
        ];

        fields
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
            .map(|(name, _)| name)
    }
}
