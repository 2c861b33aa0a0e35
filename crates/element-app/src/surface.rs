//! Render surface collaborator.
//!
//! The simulation hands a `Frame` to the surface once per tick. A windowed
//! surface would blit each `DrawCommand` from its texture atlas; the
//! headless `LogSurface` here reports HUD changes through `tracing`, and
//! `JsonSurface` streams every frame as one JSON line.

use std::io::Write;

use thiserror::Error;
use tracing::{debug, info};

use element_core::level::LevelError;
use element_core::state::{Frame, StatusBar};

/// Failure while presenting a frame.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("render surface closed")]
    Closed,
    #[error("failed to present frame at tick {tick}: {reason}")]
    Present { tick: u64, reason: String },
}

/// Failure while setting up a session. Nothing is simulated when one of
/// these is returned.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("level rejected: {0}")]
    Level(#[from] LevelError),
}

/// Presents one frame of draw commands.
pub trait RenderSurface {
    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError>;
}

/// Headless surface that logs the status bar whenever it changes and a
/// periodic heartbeat with the draw count.
#[derive(Debug)]
pub struct LogSurface {
    heartbeat_ticks: u64,
    frames_presented: u64,
    last_status: Option<StatusBar>,
}

impl LogSurface {
    /// `heartbeat_ticks` of 0 disables the periodic line.
    pub fn new(heartbeat_ticks: u64) -> Self {
        Self {
            heartbeat_ticks,
            frames_presented: 0,
            last_status: None,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_status(&self) -> Option<StatusBar> {
        self.last_status
    }
}

impl Default for LogSurface {
    fn default() -> Self {
        Self::new(crate::game_loop::TICKS_PER_SECOND * 5)
    }
}

impl RenderSurface for LogSurface {
    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError> {
        self.frames_presented += 1;

        if self.last_status != Some(frame.status) {
            info!(
                tick = frame.time.tick,
                hp = frame.status.hp,
                gold = frame.status.gold,
                level = frame.status.level,
                "status"
            );
            self.last_status = Some(frame.status);
        }

        if self.heartbeat_ticks > 0 && frame.time.tick % self.heartbeat_ticks == 0 {
            debug!(
                tick = frame.time.tick,
                elapsed_secs = frame.time.elapsed_secs,
                draws = frame.draws.len(),
                "frame"
            );
        }

        Ok(())
    }
}

/// Writes each frame as a JSON line to `out`.
pub struct JsonSurface<W: Write> {
    out: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for JsonSurface<W> {
    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError> {
        let tick = frame.time.tick;
        serde_json::to_writer(&mut self.out, frame)
            .map_err(|e| SurfaceError::Present { tick, reason: e.to_string() })?;
        writeln!(self.out).map_err(|e| SurfaceError::Present { tick, reason: e.to_string() })
    }
}
