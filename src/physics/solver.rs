//! Impulse-based velocity resolution along the collision normal.

use crate::math::collision_normal;

use super::contact::Resolution;
use super::rigid_body::Body;
use super::PhysicsConfig;

/// Resolve the velocities of an overlapping pair.
///
/// Pairs already separating along the normal are left alone, which keeps a
/// second evaluation in the same frame from adding energy. There is no
/// tangential (friction) component.
pub fn resolve_velocities(a: &mut Body, b: &mut Body, config: &PhysicsConfig) -> Resolution {
    let relative_velocity = b.velocity() - a.velocity();
    let normal = collision_normal(a.position(), b.position());

    let velocity_along_normal = relative_velocity.dot(normal);
    if velocity_along_normal > 0.0 {
        return Resolution::Separating;
    }

    let j = -(1.0 + config.restitution) * velocity_along_normal
        / (a.inverse_mass() + b.inverse_mass());
    let impulse = j * normal;

    a.apply_impulse(-impulse);
    b.apply_impulse(impulse);

    Resolution::Applied { impulse }
}
