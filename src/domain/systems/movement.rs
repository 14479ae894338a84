use crate::domain::tuning::worm::WormTuning;
use std::f64::consts::TAU;

/// Maps any finite angle onto the equivalent orientation in `[0, 2π)`.
pub fn normalize_orientation(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative angles up to exactly 2π.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// AP cost of walking `steps` radii along `orientation`.
///
/// Vertical travel is dearer than horizontal travel; diagonal steps pay a
/// blend weighted by the direction's components.
pub fn move_cost(steps: u64, orientation: f64, tuning: &WormTuning) -> u64 {
    let per_step = tuning.horizontal_cost * orientation.cos().abs()
        + tuning.vertical_cost * orientation.sin().abs();
    (steps as f64 * per_step).round() as u64
}

/// AP cost of turning over `angle` radians in either direction.
pub fn turn_cost(angle: f64, tuning: &WormTuning) -> u64 {
    (tuning.turn_cost * angle.abs() / TAU).round() as u64
}

/// Offset covered by `steps` steps of one radius each (0 rad = +X, counter-clockwise).
pub fn displacement(steps: u64, radius: f64, orientation: f64) -> (f64, f64) {
    let distance = radius * steps as f64;
    (orientation.cos() * distance, orientation.sin() * distance)
}
