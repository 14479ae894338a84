// The worm entity: position, orientation, body size and an action-point budget.

use super::errors::WormError;
use super::name::validate_worm_name;
use super::state::{JumpOutcome, Position};
use super::systems::{jump, movement};
use super::tuning::worm::WormTuning;
use std::f64::consts::PI;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Worm {
    tuning: WormTuning,
    name: String,
    x: f64,
    y: f64,
    orientation: f64, // always in [0, 2π)
    radius: f64,

    // Derived from radius; recomputed together on every resize.
    mass: f64,
    max_action_points: u64,

    action_points: u64, // 0..=max_action_points
}

impl Worm {
    /// Spawns a worm with the default gameplay tuning and a full AP budget.
    pub fn new(
        x: f64,
        y: f64,
        radius: f64,
        orientation: f64,
        name: &str,
    ) -> Result<Self, WormError> {
        Self::with_tuning(WormTuning::default(), x, y, radius, orientation, name)
    }

    pub fn with_tuning(
        tuning: WormTuning,
        x: f64,
        y: f64,
        radius: f64,
        orientation: f64,
        name: &str,
    ) -> Result<Self, WormError> {
        if let Some(field) = tuning.invalid_field() {
            return Err(WormError::InvalidTuning(field));
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(WormError::InvalidPosition { x, y });
        }
        if !orientation.is_finite() {
            return Err(WormError::InvalidOrientation(orientation));
        }
        check_radius(radius, &tuning)?;
        let name = validate_worm_name(name)?;

        let mass = mass_for(radius, &tuning);
        let max_action_points = max_action_points_for(mass);

        Ok(Self {
            tuning,
            name,
            x,
            y,
            orientation: movement::normalize_orientation(orientation),
            radius,
            mass,
            max_action_points,
            action_points: max_action_points,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn min_radius(&self) -> f64 {
        self.tuning.min_radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn max_action_points(&self) -> u64 {
        self.max_action_points
    }

    pub fn action_points(&self) -> u64 {
        self.action_points
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), WormError> {
        self.name = validate_worm_name(name)?;
        Ok(())
    }

    /// Resizes the worm, recomputing mass and max AP.
    ///
    /// Current AP is clamped when the new maximum is lower.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), WormError> {
        check_radius(radius, &self.tuning)?;

        self.radius = radius;
        self.mass = mass_for(radius, &self.tuning);
        self.max_action_points = max_action_points_for(self.mass);
        self.action_points = self.action_points.min(self.max_action_points);

        debug!(
            radius,
            mass = self.mass,
            max_action_points = self.max_action_points,
            "worm resized"
        );
        Ok(())
    }

    pub fn move_cost(&self, steps: u64) -> u64 {
        movement::move_cost(steps, self.orientation, &self.tuning)
    }

    pub fn is_legal_move(&self, steps: i64) -> bool {
        u64::try_from(steps).is_ok_and(|steps| self.move_cost(steps) <= self.action_points)
    }

    /// Walks `steps` radii along the current orientation.
    pub fn move_steps(&mut self, steps: i64) -> Result<(), WormError> {
        let Ok(steps) = u64::try_from(steps) else {
            return Err(WormError::NegativeSteps(steps));
        };

        let cost = self.move_cost(steps);
        if cost > self.action_points {
            return Err(WormError::InsufficientMovePoints {
                cost,
                available: self.action_points,
            });
        }

        let (dx, dy) = movement::displacement(steps, self.radius, self.orientation);
        self.x += dx;
        self.y += dy;
        self.action_points -= cost;

        debug!(steps, cost, x = self.x, y = self.y, "worm moved");
        Ok(())
    }

    pub fn turn_cost(&self, angle: f64) -> u64 {
        movement::turn_cost(angle, &self.tuning)
    }

    /// A turn needs strictly more AP than it costs.
    pub fn is_legal_turn(&self, angle: f64) -> bool {
        angle.is_finite() && self.action_points > self.turn_cost(angle)
    }

    /// Turns by `angle` radians (positive is counter-clockwise).
    pub fn turn(&mut self, angle: f64) -> Result<(), WormError> {
        if !angle.is_finite() {
            return Err(WormError::InvalidOrientation(angle));
        }

        let cost = self.turn_cost(angle);
        if self.action_points <= cost {
            return Err(WormError::InsufficientTurnPoints {
                cost,
                available: self.action_points,
            });
        }

        self.orientation = movement::normalize_orientation(self.orientation + angle);
        self.action_points -= cost;

        debug!(angle, cost, orientation = self.orientation, "worm turned");
        Ok(())
    }

    pub fn is_facing_down(&self) -> bool {
        jump::is_facing_down(self.orientation)
    }

    fn can_jump(&self) -> bool {
        !self.is_facing_down() && self.action_points > 0
    }

    fn jump_velocity(&self) -> f64 {
        jump::initial_velocity(self.action_points, self.mass, &self.tuning)
    }

    /// Jumps along the current orientation, spending every remaining AP.
    ///
    /// Facing down is not an error: the worm simply stays where it is.
    pub fn jump(&mut self) -> Result<JumpOutcome, WormError> {
        if self.is_facing_down() {
            return Ok(JumpOutcome::FacingDown);
        }
        if self.action_points == 0 {
            return Err(WormError::NoActionPoints);
        }

        let distance = jump::jump_range(self.jump_velocity(), self.orientation, &self.tuning);
        self.x += distance;
        self.action_points = 0;

        debug!(distance, x = self.x, "worm jumped");
        Ok(JumpOutcome::Jumped { distance })
    }

    /// Airtime of the jump the worm would make right now.
    pub fn jump_time(&self) -> Option<f64> {
        if !self.can_jump() {
            return None;
        }
        Some(jump::flight_time(
            self.jump_velocity(),
            self.orientation,
            &self.tuning,
        ))
    }

    /// Where the worm would be `elapsed` seconds into the jump it would make right now.
    pub fn jump_step(&self, elapsed: f64) -> Option<Position> {
        if !self.can_jump() {
            return None;
        }
        Some(jump::position_at(
            self.position(),
            self.jump_velocity(),
            self.orientation,
            elapsed,
            &self.tuning,
        ))
    }
}

fn check_radius(radius: f64, tuning: &WormTuning) -> Result<(), WormError> {
    // NaN fails the comparison as well.
    let in_range = radius.is_finite() && radius >= tuning.min_radius;

    // Huge radii overflow the mass to inf or push round(mass) past the AP counter.
    if in_range && mass_fits(mass_for(radius, tuning)) {
        Ok(())
    } else {
        Err(WormError::InvalidRadius {
            radius,
            min_radius: tuning.min_radius,
        })
    }
}

fn mass_fits(mass: f64) -> bool {
    // u64::MAX as f64 is 2^64, one past the largest storable value.
    mass.is_finite() && mass.round() < u64::MAX as f64
}

fn mass_for(radius: f64, tuning: &WormTuning) -> f64 {
    tuning.density * (4.0 / 3.0) * PI * radius.powi(3)
}

fn max_action_points_for(mass: f64) -> u64 {
    mass.round() as u64
}
