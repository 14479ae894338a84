// Domain layer: the worm entity and the rules that govern it.

pub mod errors;
pub mod name;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod worm;

pub use errors::WormError;
pub use state::{JumpOutcome, Position, WormSnapshot};
pub use tuning::worm::WormTuning;
pub use worm::Worm;
