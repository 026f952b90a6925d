//! 2D vector math used by every geometric computation.
//!
//! Vectors are [`glam::DVec2`]; the free functions here spell out the few
//! operations the physics needs so their degenerate behavior is explicit.

use glam::DVec2;

/// Scalar type for all physics quantities.
pub type Scalar = f64;

/// 2D vector in arena coordinates (y grows downward).
pub type Vector2 = DVec2;

/// Vector pointing from `a` to `b` (`b - a`).
#[inline]
pub fn difference(a: Vector2, b: Vector2) -> Vector2 {
    b - a
}

/// Euclidean length `sqrt(x² + y²)`.
#[inline]
pub fn magnitude(v: Vector2) -> Scalar {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector along `v`.
///
/// Not guarded: a zero-length input divides by zero and yields NaN
/// components. Callers that can see coincident points must check
/// [`Vector2::is_finite`] on the result.
#[inline]
pub fn normalize(v: Vector2) -> Vector2 {
    let len = magnitude(v);
    Vector2::new(v.x / len, v.y / len)
}

/// Collision normal: unit vector from `from` towards `to`.
#[inline]
pub fn collision_normal(from: Vector2, to: Vector2) -> Vector2 {
    normalize(difference(from, to))
}
