//! Ballpit 2D Physics
//!
//! Circular rigid bodies falling under gravity inside a bounded arena,
//! bouncing off the walls and off each other.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **math** - 2D vector helpers on top of glam
//! 2. **physics** - Bodies, arena, detection, correction, resolution and the simulation step
//! 3. **color** - Display palette carried by each body (opaque to physics)
//! 4. **render** - Read-only per-body draw records (feature = "render")
//! 5. **engine** - Headless frame driver with App trait (feature = "engine")

pub mod color;
pub mod error;
pub mod math;
pub mod physics;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "engine")]
pub mod engine;

// Re-export commonly used types
pub use color::Color;
pub use error::{Result, SimulationError};
pub use math::{Scalar, Vector2};

pub use physics::{
    Arena, Body, Contact, Detection, PairPolicy, PhysicsConfig, Resolution, Simulation,
    SpawnConfig, NOMINAL_STEP,
};

#[cfg(feature = "render")]
pub use render::{extract_instances, CircleInstance};

#[cfg(feature = "engine")]
pub use engine::{run_headless, App, FrameClock, FrameInput, FrameOutput, LoopConfig};

// Re-export glam for convenience
pub use glam;
