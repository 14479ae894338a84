// Domain-level value types and read-only snapshots of a worm.

use super::worm::Worm;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum JumpOutcome {
    /// The worm left the ground and landed `distance` metres along x.
    Jumped { distance: f64 },
    /// Facing down, so the worm stayed put and kept its AP.
    FacingDown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WormSnapshot {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub orientation: f64,
    pub radius: f64,
    pub mass: f64,
    pub action_points: u64,
    pub max_action_points: u64,
}

impl From<&Worm> for WormSnapshot {
    fn from(w: &Worm) -> Self {
        Self {
            name: w.name().to_string(),
            x: w.x(),
            y: w.y(),
            orientation: w.orientation(),
            radius: w.radius(),
            mass: w.mass(),
            action_points: w.action_points(),
            max_action_points: w.max_action_points(),
        }
    }
}
