//! Game loop: drives the simulation engine at a fixed 60Hz step.
//!
//! Each iteration polls the input source, queues the events on the engine,
//! advances one tick and presents the resulting frame. Pacing sleeps until
//! the next tick deadline and resets the deadline when the loop falls too
//! far behind, so a slow frame never triggers a catch-up spiral.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use element_core::constants::TICK_RATE;
use element_core::level::LevelConfig;
use element_core::state::StatusBar;
use element_sim::{SimConfig, SimulationEngine};

use crate::input::InputSource;
use crate::surface::{InitError, RenderSurface, SurfaceError};

pub const TICKS_PER_SECOND: u64 = TICK_RATE as u64;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND);

/// Behavior of a single `run` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopConfig {
    /// Stop after this many ticks. `None` runs until quit.
    pub max_ticks: Option<u64>,
    /// Sleep to hold real time at the tick rate. Off for tests and
    /// fast-forward runs.
    pub paced: bool,
}

/// What happened during a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub quit: bool,
    pub final_status: StatusBar,
    pub events: usize,
}

/// Validate the level and build the engine. The loop never starts on error.
pub fn init_engine(level: LevelConfig) -> Result<SimulationEngine, InitError> {
    let engine = SimulationEngine::new(SimConfig { level })?;
    info!(
        waypoints = engine.level().waypoints.len(),
        waves = engine.level().waves.len(),
        "engine ready"
    );
    Ok(engine)
}

/// Run the loop until quit is requested, the tick limit is reached, or the
/// surface fails to present.
pub fn run<I, S>(
    engine: &mut SimulationEngine,
    input: &mut I,
    surface: &mut S,
    config: LoopConfig,
) -> Result<RunSummary, SurfaceError>
where
    I: InputSource + ?Sized,
    S: RenderSurface + ?Sized,
{
    let mut summary = RunSummary::default();
    let mut next_tick_time = Instant::now();

    loop {
        if config.max_ticks.is_some_and(|max| summary.ticks >= max) {
            debug!(ticks = summary.ticks, "tick limit reached");
            break;
        }

        // 1. Forward everything the input source saw since the last poll
        engine.queue_inputs(input.poll_events());

        // 2. Advance one tick
        let frame = engine.tick();
        summary.ticks += 1;
        summary.events += frame.events.len();
        summary.final_status = frame.status;

        // 3. Present, including the frame that processed a quit
        surface.present(&frame)?;
        if engine.quit_requested() {
            summary.quit = true;
            info!(tick = frame.time.tick, "quit requested");
            break;
        }

        // 4. Sleep until the next tick
        if config.paced {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset the deadline
                next_tick_time = now;
            }
        }
    }

    Ok(summary)
}
