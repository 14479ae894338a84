// Use cases layer: drives a worm through a scripted sequence of commands.

pub mod turn;
pub mod types;

pub use turn::TurnRunner;
pub use types::{CommandOutcome, CommandReport, Scenario, WormCommand, WormSpawn};
