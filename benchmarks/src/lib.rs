//! Shared scene setup for the physics benchmarks.

use ballpit::{Arena, Body, Color, PairPolicy, PhysicsConfig, Simulation, SpawnConfig, Vector2};

/// Fixed seed so every benchmark run sees the same layout.
pub const BENCH_SEED: u64 = 0x5eed;

/// Spawned simulation with `n` bodies in a window-sized arena.
pub fn setup_simulation(n: usize, policy: PairPolicy) -> Simulation {
    let arena = Arena::new(1920.0, 1080.0).expect("valid arena");
    let config = PhysicsConfig::default().pair_policy(policy);
    let spawn = SpawnConfig::default()
        .body_count(n)
        .radius_divisor(64.0)
        .seed(BENCH_SEED);
    Simulation::spawn(arena, config, &spawn).expect("valid spawn config")
}

/// Two equal bodies, overlapping and approaching head-on.
pub fn overlapping_pair() -> (Body, Body) {
    (
        Body::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 10.0, Color::RED),
        Body::new(Vector2::new(15.0, 0.0), Vector2::new(-1.0, 0.0), 10.0, Color::PINK),
    )
}

/// Two equal bodies far apart.
pub fn separated_pair() -> (Body, Body) {
    (
        Body::new(Vector2::new(0.0, 0.0), Vector2::ZERO, 10.0, Color::RED),
        Body::new(Vector2::new(100.0, 0.0), Vector2::ZERO, 10.0, Color::PINK),
    )
}
