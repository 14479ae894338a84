// Use-case level inputs/outputs for the turn runner.

use crate::domain::{Worm, WormError, WormSnapshot, WormTuning};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WormCommand {
    Move { steps: i64 },
    Turn { angle: f64 },
    Jump,
    Rename { name: String },
    Resize { radius: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandOutcome {
    Applied,
    Jumped { distance: f64 },
    // Jump requested while facing down.
    StayedPut,
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandReport {
    pub index: usize,
    pub command: WormCommand,
    pub outcome: CommandOutcome,
    pub worm: WormSnapshot,
}

/// Initial state of the scripted worm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WormSpawn {
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub radius: f64,
    #[serde(default)]
    pub orientation: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub worm: WormSpawn,
    #[serde(default)]
    pub commands: Vec<WormCommand>,
}

impl Scenario {
    pub fn spawn(&self, tuning: WormTuning) -> Result<Worm, WormError> {
        let spawn = &self.worm;
        Worm::with_tuning(
            tuning,
            spawn.x,
            spawn.y,
            spawn.radius,
            spawn.orientation,
            &spawn.name,
        )
    }
}
