//! Headless ballpit host.
//!
//! Usage: ballpit-app [FRAMES] [SEED]
//! Logging:  RUST_LOG=info (or debug/trace for physics internals)

use anyhow::Context;
use ballpit::render::extract_instances;
use ballpit::{
    run_headless, App, Arena, FrameInput, FrameOutput, LoopConfig, PhysicsConfig, Simulation,
    SpawnConfig,
};

/// Arena size, standing in for a browser window.
const ARENA_WIDTH: f64 = 1280.0;
const ARENA_HEIGHT: f64 = 720.0;
/// Frames between position reports.
const REPORT_INTERVAL: u64 = 60;

struct ReportApp {
    contacts: usize,
}

impl App for ReportApp {
    fn init(&mut self, sim: &Simulation) {
        for (i, body) in sim.bodies().iter().enumerate() {
            log::info!(
                "body {}: position {:?} velocity {:?} radius {} color {}",
                i,
                body.position(),
                body.velocity(),
                body.radius(),
                body.color()
            );
        }
    }

    fn frame(&mut self, sim: &Simulation, input: &FrameInput) -> FrameOutput {
        self.contacts += sim.contacts().len();

        if input.frame % REPORT_INTERVAL == 0 {
            // Stand-in for drawing: the same records a renderer would upload.
            let instances = extract_instances(sim);
            log::info!(
                "frame {} t={:.2}s contacts so far {}",
                input.frame,
                sim.elapsed_time(),
                self.contacts
            );
            for (i, instance) in instances.iter().enumerate() {
                log::debug!(
                    "  body {} at ({:.1}, {:.1})",
                    i,
                    instance.center[0],
                    instance.center[1]
                );
            }
        }

        if !sim.is_finite() {
            log::error!("simulation state went non-finite at frame {}", input.frame);
            return FrameOutput::exit();
        }
        FrameOutput::default()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames: u64 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count {:?}", arg))?,
        None => 600,
    };
    let mut spawn = SpawnConfig::default();
    if let Some(arg) = args.next() {
        spawn.seed = Some(
            arg.parse()
                .with_context(|| format!("invalid seed {:?}", arg))?,
        );
    }

    let arena = Arena::new(ARENA_WIDTH, ARENA_HEIGHT)?;
    let mut sim = Simulation::spawn(arena, PhysicsConfig::default(), &spawn)
        .context("failed to spawn simulation")?;

    let config = LoopConfig {
        max_frames: Some(frames),
        ..LoopConfig::default()
    };
    let mut app = ReportApp { contacts: 0 };
    let run = run_headless(&mut sim, &config, &mut app);

    log::info!("ran {} frames, {} contacts", run, app.contacts);
    Ok(())
}
