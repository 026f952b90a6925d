//! Circle physics: integration, collision detection and response.
//!
//! # Architecture
//!
//! Each call to [`Simulation::step`] runs one frame:
//!
//! 1. Integrate every body (Euler position update, gravity, wall bounces)
//! 2. Walk body pairs in collection order (see [`PairPolicy`])
//! 3. Narrowphase: circle overlap test and penetration depth
//! 4. Positional correction of the overlapping pair
//! 5. Impulse resolution of the pair's velocities
//!
//! Steps are fixed-size: elapsed wall time is recorded but never scales the
//! integration, so runs are reproducible regardless of host frame rate.

pub mod arena;
pub mod broadphase;
pub mod contact;
pub mod correction;
pub mod narrowphase;
pub mod rigid_body;
pub mod solver;
pub mod spawn;

pub use self::arena::Arena;
pub use self::broadphase::PairPolicy;
pub use self::contact::{Contact, Detection, Resolution};
pub use self::rigid_body::Body;
pub use self::spawn::SpawnConfig;

use tracing::{debug, trace, warn};

use crate::error::{Result, SimulationError};
use crate::math::{Scalar, Vector2};

use self::broadphase::{pair_mut, pairs};
use self::correction::correct_positions;
use self::narrowphase::detect;
use self::solver::resolve_velocities;

/// Size of one integration step, in frames.
pub const NOMINAL_STEP: Scalar = 1.0;

/// Configuration for the physics simulation.
#[derive(Debug, Clone)]
pub struct PhysicsConfig {
    /// Added to velocity every step. Default: (0, 0.1), y grows downward.
    pub gravity: Vector2,
    /// Side walls scale velocity.x by `-wall_restitution`. Default: 1.0.
    pub wall_restitution: Scalar,
    /// Floor scales velocity.y by `-floor_restitution`. Default: 0.7.
    pub floor_restitution: Scalar,
    /// Ceiling scales velocity.y by `-ceiling_restitution`. Default: 0.7.
    pub ceiling_restitution: Scalar,
    /// Extra distance below the ceiling a bouncing body is placed at. Default: 1.0.
    pub ceiling_offset: Scalar,
    /// Restitution of body-body collisions. Default: 0.7.
    pub restitution: Scalar,
    /// Penetration ignored by positional correction. Default: 0.01.
    pub penetration_slop: Scalar,
    /// Share of the remaining penetration removed per step. Default: 0.2.
    pub correction_percent: Scalar,
    /// Pair traversal of the collision scan. Default: [`PairPolicy::Ordered`].
    pub pair_policy: PairPolicy,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, 0.1),
            wall_restitution: 1.0,
            floor_restitution: 0.7,
            ceiling_restitution: 0.7,
            ceiling_offset: 1.0,
            restitution: 0.7,
            penetration_slop: 0.01,
            correction_percent: 0.2,
            pair_policy: PairPolicy::Ordered,
        }
    }
}

impl PhysicsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gravity(mut self, gravity: Vector2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn restitution(mut self, restitution: Scalar) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn floor_restitution(mut self, floor_restitution: Scalar) -> Self {
        self.floor_restitution = floor_restitution;
        self
    }

    pub fn correction(mut self, slop: Scalar, percent: Scalar) -> Self {
        self.penetration_slop = slop;
        self.correction_percent = percent;
        self
    }

    pub fn pair_policy(mut self, pair_policy: PairPolicy) -> Self {
        self.pair_policy = pair_policy;
        self
    }

    /// Reject non-finite tuning values.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("gravity.x", self.gravity.x),
            ("gravity.y", self.gravity.y),
            ("wall_restitution", self.wall_restitution),
            ("floor_restitution", self.floor_restitution),
            ("ceiling_restitution", self.ceiling_restitution),
            ("ceiling_offset", self.ceiling_offset),
            ("restitution", self.restitution),
            ("penetration_slop", self.penetration_slop),
            ("correction_percent", self.correction_percent),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(SimulationError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// A fixed collection of bodies in an arena, advanced one frame at a time.
pub struct Simulation {
    arena: Arena,
    config: PhysicsConfig,
    bodies: Vec<Body>,
    contacts: Vec<Contact>,
    frame: u64,
    elapsed_time: f64,
    degenerate: bool,
}

impl Simulation {
    /// Create a simulation over an existing body collection.
    pub fn new(arena: Arena, config: PhysicsConfig, bodies: Vec<Body>) -> Result<Self> {
        config.validate()?;
        debug!(
            width = arena.width(),
            height = arena.height(),
            bodies = bodies.len(),
            "simulation created"
        );
        Ok(Self {
            arena,
            config,
            bodies,
            contacts: Vec::new(),
            frame: 0,
            elapsed_time: 0.0,
            degenerate: false,
        })
    }

    /// Create a simulation with randomly placed bodies.
    ///
    /// Fails unless twice the spawn radius fits the arena width, and twice
    /// the radius plus the ceiling offset fits its height.
    pub fn spawn(arena: Arena, config: PhysicsConfig, spawn: &SpawnConfig) -> Result<Self> {
        let radius = arena.spawn_radius(spawn.radius_divisor);
        if !arena.fits(radius, config.ceiling_offset) {
            return Err(SimulationError::InvalidConfig(format!(
                "radius {} with ceiling offset {} does not fit a {} x {} arena",
                radius,
                config.ceiling_offset,
                arena.width(),
                arena.height()
            )));
        }
        let bodies = spawn::spawn_bodies(&arena, spawn)?;
        debug!(count = bodies.len(), seed = ?spawn.seed, "bodies spawned");
        Self::new(arena, config, bodies)
    }

    /// Advance one frame.
    ///
    /// `delta_time` is the host's elapsed wall time since the previous
    /// frame; it only accumulates into [`Simulation::elapsed_time`].
    pub fn step(&mut self, delta_time: f64) {
        self.elapsed_time += delta_time;
        self.frame += 1;

        // 1. Integrate
        for body in &mut self.bodies {
            body.integrate(&self.arena, &self.config);
        }

        // 2. Pair scan: detect, correct, resolve
        self.contacts.clear();
        for (i, j) in pairs(self.bodies.len(), self.config.pair_policy) {
            let (a, b) = pair_mut(&mut self.bodies, i, j);

            let Some(penetration) = detect(a, b).penetration_if_overlapping() else {
                continue;
            };

            correct_positions(a, b, penetration, &self.config);
            let resolution = resolve_velocities(a, b, &self.config);

            self.contacts.push(Contact {
                a: i,
                b: j,
                penetration,
                resolution,
            });
        }

        trace!(
            frame = self.frame,
            contacts = self.contacts.len(),
            "physics step"
        );

        if !self.degenerate && !self.is_finite() {
            self.degenerate = true;
            warn!(
                frame = self.frame,
                "non-finite body state (coincident centers?)"
            );
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Overlapping pairs handled during the last step, in scan order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of steps taken.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Sum of the `delta_time` values passed to [`Simulation::step`].
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// True while every body's position and velocity is finite.
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(Body::is_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn ball(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Body {
        Body::new(
            Vector2::new(x, y),
            Vector2::new(vx, vy),
            radius,
            Color::default(),
        )
    }

    fn weightless() -> PhysicsConfig {
        PhysicsConfig::default().gravity(Vector2::ZERO)
    }

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, Vector2::new(0.0, 0.1));
        assert_eq!(config.wall_restitution, 1.0);
        assert_eq!(config.floor_restitution, 0.7);
        assert_eq!(config.ceiling_restitution, 0.7);
        assert_eq!(config.ceiling_offset, 1.0);
        assert_eq!(config.restitution, 0.7);
        assert_eq!(config.penetration_slop, 0.01);
        assert_eq!(config.correction_percent, 0.2);
        assert_eq!(config.pair_policy, PairPolicy::Ordered);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = PhysicsConfig::new()
            .floor_restitution(0.5)
            .correction(0.05, 0.4)
            .restitution(1.0);
        assert_eq!(config.floor_restitution, 0.5);
        assert_eq!(config.penetration_slop, 0.05);
        assert_eq!(config.correction_percent, 0.4);
        assert_eq!(config.restitution, 1.0);
        assert_eq!(config.ceiling_restitution, 0.7, "untouched fields keep defaults");
        assert!(config.validate().is_ok());

        let bad = PhysicsConfig::new().correction(f64::INFINITY, 0.2);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_config_rejects_nan() {
        let config = PhysicsConfig::default().restitution(f64::NAN);
        assert!(config.validate().is_err());
        let arena = Arena::new(10.0, 10.0).unwrap();
        assert!(Simulation::new(arena, config, Vec::new()).is_err());
    }

    #[test]
    fn test_free_fall() {
        let arena = Arena::new(200.0, 1000.0).unwrap();
        let mut sim = Simulation::new(
            arena,
            PhysicsConfig::default(),
            vec![ball(100.0, 50.0, 0.0, 0.0, 10.0)],
        )
        .unwrap();

        for _ in 0..60 {
            sim.step(1.0 / 60.0);
        }

        let body = &sim.bodies()[0];
        assert!(
            body.position().y > 50.0,
            "body should have fallen: y = {}",
            body.position().y
        );
        assert_eq!(body.position().x, 100.0);
        assert_eq!(sim.frame(), 60);
        assert!((sim.elapsed_time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_ignores_delta_time() {
        let arena = Arena::new(300.0, 300.0).unwrap();
        let bodies = vec![
            ball(100.0, 100.0, 2.0, -3.0, 15.0),
            ball(130.0, 110.0, -1.0, 0.0, 15.0),
        ];
        let mut fast = Simulation::new(arena, PhysicsConfig::default(), bodies.clone()).unwrap();
        let mut slow = Simulation::new(arena, PhysicsConfig::default(), bodies).unwrap();

        for _ in 0..120 {
            fast.step(1.0 / 144.0);
            slow.step(1.0 / 15.0);
        }

        assert_eq!(fast.bodies(), slow.bodies());
    }

    #[test]
    fn test_ordered_policy_visits_both_orderings() {
        let arena = Arena::new(500.0, 500.0).unwrap();
        // Second visit sees the pair already separating after the first.
        let bodies = vec![
            ball(100.0, 100.0, 1.0, 0.0, 10.0),
            ball(115.0, 100.0, -1.0, 0.0, 10.0),
        ];
        let mut sim = Simulation::new(arena, weightless(), bodies).unwrap();
        sim.step(0.0);

        let contacts = sim.contacts();
        assert_eq!(contacts.len(), 2);
        assert_eq!((contacts[0].a, contacts[0].b), (0, 1));
        assert_eq!((contacts[1].a, contacts[1].b), (1, 0));
        assert!(contacts[0].resolution.is_applied());
        assert_eq!(contacts[1].resolution, Resolution::Separating);
    }

    #[test]
    fn test_unordered_policy_visits_pair_once() {
        let arena = Arena::new(500.0, 500.0).unwrap();
        let bodies = vec![
            ball(100.0, 100.0, 1.0, 0.0, 10.0),
            ball(115.0, 100.0, -1.0, 0.0, 10.0),
        ];
        let config = weightless().pair_policy(PairPolicy::Unordered);
        let mut sim = Simulation::new(arena, config, bodies).unwrap();
        sim.step(0.0);

        assert_eq!(sim.contacts().len(), 1);
        assert_eq!((sim.contacts()[0].a, sim.contacts()[0].b), (0, 1));
    }

    #[test]
    fn test_collision_separates_bodies() {
        let arena = Arena::new(500.0, 500.0).unwrap();
        let bodies = vec![
            ball(100.0, 250.0, 2.0, 0.0, 10.0),
            ball(140.0, 250.0, -2.0, 0.0, 10.0),
        ];
        let mut sim = Simulation::new(arena, weightless(), bodies).unwrap();

        let mut collided = false;
        for _ in 0..40 {
            sim.step(1.0 / 60.0);
            collided |= !sim.contacts().is_empty();
        }

        assert!(collided, "bodies should have met");
        let [a, b] = sim.bodies() else {
            panic!("expected two bodies");
        };
        assert!(a.velocity().x < 0.0, "a should rebound: {:?}", a.velocity());
        assert!(b.velocity().x > 0.0, "b should rebound: {:?}", b.velocity());
        assert!(!detect(a, b).overlapping, "bodies should have separated");
    }

    #[test]
    fn test_bodies_stay_in_arena() {
        let arena = Arena::new(640.0, 480.0).unwrap();
        let spawn = SpawnConfig::default().seed(1234);
        let mut sim = Simulation::spawn(arena, PhysicsConfig::default(), &spawn).unwrap();

        for _ in 0..600 {
            sim.step(1.0 / 60.0);
            assert!(sim.is_finite(), "frame {} went non-finite", sim.frame());
            for body in sim.bodies() {
                let p = body.position();
                let r = body.radius();
                // Correction runs after the wall clamp and may overshoot it by
                // less than one radius until the next integration.
                assert!(p.x > -r && p.x < 640.0 + r, "frame {}: x = {}", sim.frame(), p.x);
                assert!(p.y > -r && p.y < 480.0 + r, "frame {}: y = {}", sim.frame(), p.y);
            }
        }
        assert_eq!(sim.bodies().len(), 9);
    }

    #[test]
    fn test_spawn_rejects_radius_without_ceiling_room() {
        let arena = Arena::new(100.0, 100.0).unwrap();

        // r = 50 fills the arena exactly, leaving no room for the ceiling offset.
        let spawn = SpawnConfig::default().radius_divisor(2.0).seed(8);
        assert!(matches!(
            Simulation::spawn(arena, PhysicsConfig::default(), &spawn),
            Err(SimulationError::InvalidConfig(_))
        ));

        let spawn = SpawnConfig::default().radius_divisor(1.0).seed(8);
        assert!(Simulation::spawn(arena, PhysicsConfig::default(), &spawn).is_err());

        let spawn = SpawnConfig::default().radius_divisor(2.1).seed(8);
        assert!(Simulation::spawn(arena, PhysicsConfig::default(), &spawn).is_ok());
    }

    #[test]
    fn test_coincident_bodies_become_non_finite() {
        let arena = Arena::new(100.0, 100.0).unwrap();
        let bodies = vec![
            ball(50.0, 50.0, 0.0, 0.0, 5.0),
            ball(50.0, 50.0, 0.0, 0.0, 5.0),
        ];
        let mut sim = Simulation::new(arena, weightless(), bodies).unwrap();
        sim.step(0.0);

        assert!(!sim.is_finite());
    }
}
