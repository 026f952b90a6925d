//! The rectangular region bodies are confined to.

use crate::error::{Result, SimulationError};
use crate::math::{Scalar, Vector2};

/// Immutable rectangle `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    width: Scalar,
    height: Scalar,
}

impl Arena {
    /// Create an arena. Both dimensions must be finite and positive.
    pub fn new(width: Scalar, height: Scalar) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimulationError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> Scalar {
        self.width
    }

    pub fn height(&self) -> Scalar {
        self.height
    }

    /// Radius used for spawned bodies: `min(width, height) / divisor`.
    pub fn spawn_radius(&self, divisor: Scalar) -> Scalar {
        self.width.min(self.height) / divisor
    }

    /// Whether a circle of `radius` can satisfy the containment bounds,
    /// with `ceiling_offset` of extra headroom for ceiling bounces.
    pub fn fits(&self, radius: Scalar, ceiling_offset: Scalar) -> bool {
        2.0 * radius <= self.width && 2.0 * radius + ceiling_offset <= self.height
    }

    /// Whether a circle of `radius` centered at `position` satisfies the
    /// post-integration containment bounds.
    pub fn contains(&self, position: Vector2, radius: Scalar) -> bool {
        position.x >= radius
            && position.x <= self.width - radius
            && position.y >= radius
            && position.y <= self.height - radius
    }
}
