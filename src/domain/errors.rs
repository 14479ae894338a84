use std::fmt;

// Domain-level errors for worm operations. State is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum WormError {
    InvalidTuning(&'static str),
    InvalidPosition { x: f64, y: f64 },
    InvalidOrientation(f64),
    InvalidRadius { radius: f64, min_radius: f64 },
    InvalidName(String),
    NegativeSteps(i64),
    InsufficientMovePoints { cost: u64, available: u64 },
    InsufficientTurnPoints { cost: u64, available: u64 },
    NoActionPoints,
}

impl fmt::Display for WormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WormError::InvalidTuning(field) => {
                write!(f, "tuning field `{field}` must be a positive finite number")
            }
            WormError::InvalidPosition { x, y } => write!(f, "invalid position ({x}, {y})"),
            WormError::InvalidOrientation(orientation) => {
                write!(f, "invalid orientation {orientation}")
            }
            WormError::InvalidRadius { radius, min_radius } => {
                write!(
                    f,
                    "radius {radius} is out of range (minimum {min_radius}, mass must fit the AP budget)"
                )
            }
            WormError::InvalidName(name) => write!(f, "invalid worm name {name:?}"),
            WormError::NegativeSteps(steps) => write!(f, "cannot move {steps} steps"),
            WormError::InsufficientMovePoints { cost, available } => {
                write!(f, "move costs {cost} AP but only {available} left")
            }
            WormError::InsufficientTurnPoints { cost, available } => {
                write!(f, "turn costs {cost} AP but only {available} left")
            }
            WormError::NoActionPoints => write!(f, "no action points left to jump"),
        }
    }
}

impl std::error::Error for WormError {}
