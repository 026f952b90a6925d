//! Frame driver with App trait and a headless loop.
//!
//! Hosts normally call [`Simulation::step`] once per display refresh. This
//! module provides the same cadence without a display: a synthetic clock
//! ticks at a fixed interval and the [`App`] sees the simulation after
//! every step, where a windowed host would draw.

use tracing::debug;

use crate::physics::Simulation;

/// Loop configuration.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Interval between synthetic frame timestamps (seconds). Default: 1/60.
    pub frame_interval: f64,
    /// Stop after this many frames. `None` runs until the app exits.
    pub max_frames: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame_interval: 1.0 / 60.0,
            max_frames: None,
        }
    }
}

/// Tracks host timestamps and reports the time between frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp (seconds) and return the delta since the
    /// previous one. The first tick has nothing to compare against and
    /// reports zero.
    pub fn tick(&mut self, timestamp: f64) -> f64 {
        let delta = self.previous.map_or(0.0, |previous| timestamp - previous);
        self.previous = Some(timestamp);
        delta
    }
}

/// Input data for a frame, available after the step has run.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// 1-based index of the step just taken.
    pub frame: u64,
    /// Time since the previous frame (seconds).
    pub delta_time: f64,
    /// Host timestamp of this frame (seconds).
    pub timestamp: f64,
}

/// Output data from a frame.
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    /// Whether to stop the loop.
    pub exit: bool,
}

impl FrameOutput {
    pub fn exit() -> Self {
        Self { exit: true }
    }
}

/// Trait for hosts driven by [`run_headless`].
pub trait App {
    /// Called once before the first step.
    fn init(&mut self, _sim: &Simulation) {}

    /// Called after every step with read-only access to the simulation.
    fn frame(&mut self, sim: &Simulation, input: &FrameInput) -> FrameOutput;
}

/// Drive `sim` until the app asks to exit or `max_frames` is reached.
///
/// Returns the number of frames run.
pub fn run_headless<A: App>(sim: &mut Simulation, config: &LoopConfig, app: &mut A) -> u64 {
    let mut clock = FrameClock::new();
    let mut frames = 0u64;

    app.init(sim);

    loop {
        if config.max_frames.is_some_and(|max| frames >= max) {
            break;
        }

        let timestamp = frames as f64 * config.frame_interval;
        let delta_time = clock.tick(timestamp);

        sim.step(delta_time);
        frames += 1;

        let input = FrameInput {
            frame: sim.frame(),
            delta_time,
            timestamp,
        };
        if app.frame(sim, &input).exit {
            break;
        }
    }

    debug!(frames, elapsed = sim.elapsed_time(), "frame loop finished");
    frames
}
