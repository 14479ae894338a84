use crate::domain::state::Position;
use crate::domain::tuning::worm::WormTuning;
use std::f64::consts::{PI, TAU};

// Ballistic jump model: the worm pushes off with a force built from its
// remaining AP plus its own weight, then flies without drag.

/// True when the orientation points below the horizon (π < θ < 2π).
pub fn is_facing_down(orientation: f64) -> bool {
    orientation > PI && orientation < TAU
}

/// Launch force in newtons.
pub fn launch_force(action_points: u64, mass: f64, tuning: &WormTuning) -> f64 {
    tuning.ap_force * action_points as f64 + mass * tuning.gravity
}

/// Take-off speed in m/s, assuming the force is applied for half a second.
pub fn initial_velocity(action_points: u64, mass: f64, tuning: &WormTuning) -> f64 {
    0.5 * launch_force(action_points, mass, tuning) / mass
}

/// Horizontal distance covered before returning to take-off height.
pub fn jump_range(velocity: f64, orientation: f64, tuning: &WormTuning) -> f64 {
    velocity.powi(2) * (2.0 * orientation).sin() / tuning.gravity
}

/// Seconds spent in the air before returning to take-off height.
pub fn flight_time(velocity: f64, orientation: f64, tuning: &WormTuning) -> f64 {
    2.0 * velocity * orientation.sin() / tuning.gravity
}

/// Position `elapsed` seconds after leaving `origin`.
pub fn position_at(
    origin: Position,
    velocity: f64,
    orientation: f64,
    elapsed: f64,
    tuning: &WormTuning,
) -> Position {
    let vx = velocity * orientation.cos();
    let vy = velocity * orientation.sin();

    Position {
        x: origin.x + vx * elapsed,
        y: origin.y + vy * elapsed - 0.5 * tuning.gravity * elapsed.powi(2),
    }
}
