pub mod domain;
pub mod frameworks;
pub mod use_cases;

pub use domain::{JumpOutcome, Position, Worm, WormError, WormSnapshot, WormTuning};
pub use frameworks::runner::run;
