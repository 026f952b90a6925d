//! Positional correction for overlapping bodies.
//!
//! Runs independently of velocity resolution. Only `correction_percent` of
//! the penetration beyond `penetration_slop` is removed per call, so deep
//! overlaps converge over several frames instead of teleporting.

use crate::math::{collision_normal, Scalar};

use super::rigid_body::Body;
use super::PhysicsConfig;

/// Push `a` and `b` apart along the collision normal.
///
/// Heavier (larger) bodies move less. A penetration at or below the slop
/// leaves both positions untouched. Coincident centers give a NaN normal
/// and poison both positions.
pub fn correct_positions(a: &mut Body, b: &mut Body, penetration: Scalar, config: &PhysicsConfig) {
    let inverse_mass_sum = a.inverse_mass() + b.inverse_mass();
    let magnitude = (penetration - config.penetration_slop).max(0.0) / inverse_mass_sum
        * config.correction_percent;

    let normal = collision_normal(a.position(), b.position());
    let correction = magnitude * normal;

    a.translate(-a.inverse_mass() * correction);
    b.translate(b.inverse_mass() * correction);
}
