//! Circular rigid body and its per-frame integration.

use crate::color::Color;
use crate::math::{Scalar, Vector2};

use super::arena::Arena;
use super::{PhysicsConfig, NOMINAL_STEP};

/// A circular rigid particle.
///
/// The radius doubles as the mass proxy: `inverse_mass = 1 / radius`, so
/// larger circles move less per unit impulse or correction. It is computed
/// once here and never inline in the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vector2,
    /// Displacement per nominal step (units/step).
    velocity: Vector2,
    radius: Scalar,
    inverse_mass: Scalar,
    color: Color,
}

impl Body {
    /// Create a body. The radius is not validated: zero or negative values
    /// produce infinite or inverted inverse mass.
    pub fn new(position: Vector2, velocity: Vector2, radius: Scalar, color: Color) -> Self {
        Self {
            position,
            velocity,
            radius,
            inverse_mass: 1.0 / radius,
            color,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn radius(&self) -> Scalar {
        self.radius
    }

    pub fn inverse_mass(&self) -> Scalar {
        self.inverse_mass
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Move the center by `delta`.
    pub fn translate(&mut self, delta: Vector2) {
        self.position += delta;
    }

    /// Apply an impulse: `velocity += inverse_mass * impulse`.
    pub fn apply_impulse(&mut self, impulse: Vector2) {
        self.velocity += self.inverse_mass * impulse;
    }

    /// False once coincident-center collisions have poisoned the state.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Advance one nominal step: explicit Euler, gravity, then wall handling.
    ///
    /// Walls clamp as well as reflect, so afterwards
    /// `radius <= x <= width - radius` and `radius <= y <= height - radius`
    /// (given an arena at least `2 * radius + ceiling_offset` tall).
    pub fn integrate(&mut self, arena: &Arena, config: &PhysicsConfig) {
        self.position += self.velocity * NOMINAL_STEP;
        self.velocity += config.gravity * NOMINAL_STEP;

        let r = self.radius;

        if self.position.x > arena.width() - r {
            self.position.x = arena.width() - r;
            self.velocity.x *= -config.wall_restitution;
        } else if self.position.x < r {
            self.position.x = r;
            self.velocity.x *= -config.wall_restitution;
        }

        if self.position.y > arena.height() - r {
            self.position.y = arena.height() - r;
            self.velocity.y *= -config.floor_restitution;
        } else if self.position.y < r {
            // Offset keeps the next step from re-triggering the ceiling.
            self.position.y = r + config.ceiling_offset;
            self.velocity.y *= -config.ceiling_restitution;
        }
    }
}
