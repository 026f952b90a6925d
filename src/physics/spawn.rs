//! Randomized initial placement of bodies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::error::{Result, SimulationError};
use crate::math::{Scalar, Vector2};

use super::arena::Arena;
use super::rigid_body::Body;

/// Parameters for generating the initial body collection.
#[derive(Debug, Clone)]
pub struct SpawnConfig {
    /// Number of bodies. Default: 9.
    pub body_count: usize,
    /// Fraction of each axis kept clear on either side. Default: 1/8,
    /// which confines centers to the inner 75% of the arena.
    pub margin_fraction: Scalar,
    /// Range of the horizontal velocity component. Default: [-3, 3].
    pub velocity_x: (Scalar, Scalar),
    /// Range of the vertical velocity component. Default: [-4, -2]
    /// (upward, since y grows downward).
    pub velocity_y: (Scalar, Scalar),
    /// Radius is `min(width, height) / radius_divisor`. Default: 16.
    pub radius_divisor: Scalar,
    /// Colors picked uniformly per body.
    pub palette: Vec<Color>,
    /// Fixed RNG seed for reproducible layouts; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            body_count: 9,
            margin_fraction: 1.0 / 8.0,
            velocity_x: (-3.0, 3.0),
            velocity_y: (-4.0, -2.0),
            radius_divisor: 16.0,
            palette: Color::PALETTE.to_vec(),
            seed: None,
        }
    }
}

impl SpawnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_count(mut self, body_count: usize) -> Self {
        self.body_count = body_count;
        self
    }

    pub fn velocity_x(mut self, min: Scalar, max: Scalar) -> Self {
        self.velocity_x = (min, max);
        self
    }

    pub fn velocity_y(mut self, min: Scalar, max: Scalar) -> Self {
        self.velocity_y = (min, max);
        self
    }

    pub fn radius_divisor(mut self, radius_divisor: Scalar) -> Self {
        self.radius_divisor = radius_divisor;
        self
    }

    pub fn palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check ranges before any random draw can panic on them.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(SimulationError::EmptyPalette);
        }
        if !(self.margin_fraction.is_finite() && (0.0..0.5).contains(&self.margin_fraction)) {
            return Err(SimulationError::InvalidConfig(format!(
                "margin_fraction must be in [0, 0.5), got {}",
                self.margin_fraction
            )));
        }
        if !(self.radius_divisor.is_finite() && self.radius_divisor > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "radius_divisor must be positive, got {}",
                self.radius_divisor
            )));
        }
        for (name, (min, max)) in [("velocity_x", self.velocity_x), ("velocity_y", self.velocity_y)] {
            if !(min.is_finite() && max.is_finite() && min <= max && (max - min).is_finite()) {
                return Err(SimulationError::InvalidConfig(format!(
                    "{} range [{}, {}] is empty, non-finite or too wide",
                    name, min, max
                )));
            }
        }
        Ok(())
    }
}

/// Generate the initial bodies for `arena`.
pub fn spawn_bodies(arena: &Arena, config: &SpawnConfig) -> Result<Vec<Body>> {
    config.validate()?;

    let radius = arena.spawn_radius(config.radius_divisor);
    if !arena.fits(radius, 0.0) {
        return Err(SimulationError::InvalidConfig(format!(
            "radius {} does not fit a {} x {} arena",
            radius,
            arena.width(),
            arena.height()
        )));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let margin_x = arena.width() * config.margin_fraction;
    let margin_y = arena.height() * config.margin_fraction;

    let bodies = (0..config.body_count)
        .map(|_| {
            let position = Vector2::new(
                rng.gen_range(margin_x..=arena.width() - margin_x),
                rng.gen_range(margin_y..=arena.height() - margin_y),
            );
            let velocity = Vector2::new(
                rng.gen_range(config.velocity_x.0..=config.velocity_x.1),
                rng.gen_range(config.velocity_y.0..=config.velocity_y.1),
            );
            let color = config.palette[rng.gen_range(0..config.palette.len())];
            Body::new(position, velocity, radius, color)
        })
        .collect();

    Ok(bodies)
}
