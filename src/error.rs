//! Construction-time errors.
//!
//! Stepping the simulation never fails; only host-supplied inputs
//! (arena bounds, tuning, spawn ranges) are checked.

use crate::math::Scalar;

/// Errors raised while building a simulation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Arena dimensions must be finite and strictly positive.
    #[error("invalid arena bounds {width} x {height}")]
    InvalidArena { width: Scalar, height: Scalar },

    /// A tuning or spawn parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Spawning needs at least one color to pick from.
    #[error("spawn palette is empty")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, SimulationError>;
