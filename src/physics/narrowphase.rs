//! Circle-circle overlap test.

use crate::math::{difference, magnitude};

use super::contact::Detection;
use super::rigid_body::Body;

/// Test two bodies for overlap.
///
/// The boolean uses squared distances so the common miss path needs no
/// square root; the penetration is `rSum - |d|` regardless and may be
/// negative for separated bodies.
pub fn detect(a: &Body, b: &Body) -> Detection {
    let radius_sum = a.radius() + b.radius();
    let d = difference(a.position(), b.position());

    Detection {
        overlapping: radius_sum * radius_sum > d.x * d.x + d.y * d.y,
        penetration: radius_sum - magnitude(d),
    }
}
