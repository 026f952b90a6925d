//! Contact data structures for collision response.

use crate::math::{Scalar, Vector2};

/// Result of testing two circles against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// True when `(ra + rb)² > |pb - pa|²`.
    pub overlapping: bool,
    /// `ra + rb - |pb - pa|`. Negative when apart; only meaningful when
    /// `overlapping` is set.
    pub penetration: Scalar,
}

impl Detection {
    /// Penetration depth, or `None` when the circles do not overlap.
    pub fn penetration_if_overlapping(&self) -> Option<Scalar> {
        self.overlapping.then_some(self.penetration)
    }
}

/// Outcome of velocity resolution for one ordered pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Bodies were already moving apart along the normal; nothing applied.
    Separating,
    /// Impulse applied to B (A received its negation).
    Applied { impulse: Vector2 },
}

impl Resolution {
    pub fn is_applied(&self) -> bool {
        matches!(self, Resolution::Applied { .. })
    }
}

/// An overlapping pair found during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of body A in the simulation's collection.
    pub a: usize,
    /// Index of body B.
    pub b: usize,
    /// Penetration depth at detection time.
    pub penetration: Scalar,
    pub resolution: Resolution,
}
