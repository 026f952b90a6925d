use ballpit::math::collision_normal;
use ballpit::physics::correction::correct_positions;
use ballpit::physics::narrowphase::detect;
use ballpit::physics::solver::resolve_velocities;
use ballpit::{Arena, Body, Color, PairPolicy, PhysicsConfig, Simulation, SpawnConfig, Vector2};

fn ball(position: Vector2, velocity: Vector2, radius: f64) -> Body {
    Body::new(position, velocity, radius, Color::TURQUOISE)
}

#[test]
fn test_head_on_pair_stops_approaching() {
    let config = PhysicsConfig::default();
    let mut a = ball(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 10.0);
    let mut b = ball(Vector2::new(15.0, 0.0), Vector2::new(-1.0, 0.0), 10.0);

    let detection = detect(&a, &b);
    assert!(detection.overlapping);
    assert_eq!(detection.penetration, 5.0);

    correct_positions(&mut a, &mut b, detection.penetration, &config);
    let resolution = resolve_velocities(&mut a, &mut b, &config);
    assert!(resolution.is_applied());

    let normal = collision_normal(a.position(), b.position());
    let along_normal = (b.velocity() - a.velocity()).dot(normal);
    assert!(along_normal >= 0.0, "still approaching: {}", along_normal);
}

#[test]
fn test_single_body_reaches_ceiling() {
    let arena = Arena::new(100.0, 100.0).unwrap();
    let body = ball(Vector2::new(50.0, 50.0), Vector2::new(0.0, -20.0), 10.0);
    let mut sim = Simulation::new(arena, PhysicsConfig::default(), vec![body]).unwrap();

    sim.step(1.0 / 60.0);
    let first = &sim.bodies()[0];
    assert_eq!(first.position(), Vector2::new(50.0, 30.0));
    assert!((first.velocity().y - -19.9).abs() < 1e-12);

    let mut bounced = false;
    for _ in 0..20 {
        let vy_before = sim.bodies()[0].velocity().y;
        sim.step(1.0 / 60.0);
        let body = &sim.bodies()[0];
        if body.velocity().y > 0.0 && vy_before < 0.0 {
            assert_eq!(body.position().y, 11.0);
            assert_eq!(body.velocity().y, (vy_before + 0.1) * -0.7);
            bounced = true;
            break;
        }
    }
    assert!(bounced, "body never bounced off the ceiling");
}

#[test]
fn test_spawned_simulation_is_contained() {
    let arena = Arena::new(1024.0, 768.0).unwrap();
    for policy in [PairPolicy::Ordered, PairPolicy::Unordered] {
        let config = PhysicsConfig::default().pair_policy(policy);
        let spawn = SpawnConfig::default().seed(99);
        let mut sim = Simulation::spawn(arena, config, &spawn).unwrap();

        for _ in 0..1200 {
            sim.step(1.0 / 60.0);
        }

        assert!(sim.is_finite());
        for body in sim.bodies() {
            let p = body.position();
            let r = body.radius();
            // Collision correction runs after the wall clamp and may push a
            // body slightly past it until the next integration.
            assert!(p.x > -r && p.x < arena.width() + r, "x = {}", p.x);
            assert!(p.y > -r && p.y < arena.height() + r, "y = {}", p.y);
        }
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let arena = Arena::new(500.0, 500.0).unwrap();
    let spawn = SpawnConfig::default().seed(2024);

    let mut first = Simulation::spawn(arena, PhysicsConfig::default(), &spawn).unwrap();
    let mut second = Simulation::spawn(arena, PhysicsConfig::default(), &spawn).unwrap();
    for _ in 0..300 {
        first.step(1.0 / 60.0);
        second.step(1.0 / 30.0);
    }

    assert_eq!(first.bodies(), second.bodies());
}
