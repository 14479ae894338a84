// Frameworks layer: environment, file loading and process wiring.

pub mod config;
pub mod runner;
