//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the ECS world and the level, queues raw input,
//! runs the twelve stages in their fixed order once per tick, and produces
//! a `Frame` for the render surface. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use tracing::trace;

use element_core::events::GameEvent;
use element_core::input::InputEvent;
use element_core::level::{LevelConfig, LevelError};
use element_core::state::Frame;
use element_core::types::SimTime;

use crate::ecs::World;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Static level content. Validated when the engine is built.
    pub level: LevelConfig,
}

/// One step of the per-tick pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Input,
    UiHitTest,
    TowerPlacement,
    Wave,
    PathNavigation,
    Endpoint,
    Targeting,
    Shooting,
    Travel,
    BulletHit,
    Movement,
    Render,
}

/// Stage order. Each stage finishes before the next starts: targeting
/// must see this tick's deaths and leaks, shooting must see this tick's
/// targets, and hits resolve before movement integrates anything that
/// died.
pub const PIPELINE: [Stage; 12] = [
    Stage::Input,
    Stage::UiHitTest,
    Stage::TowerPlacement,
    Stage::Wave,
    Stage::PathNavigation,
    Stage::Endpoint,
    Stage::Targeting,
    Stage::Shooting,
    Stage::Travel,
    Stage::BulletHit,
    Stage::Movement,
    Stage::Render,
];

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Input => "input",
            Stage::UiHitTest => "ui_hit_test",
            Stage::TowerPlacement => "tower_placement",
            Stage::Wave => "wave",
            Stage::PathNavigation => "path_navigation",
            Stage::Endpoint => "endpoint",
            Stage::Targeting => "targeting",
            Stage::Shooting => "shooting",
            Stage::Travel => "travel",
            Stage::BulletHit => "bullet_hit",
            Stage::Movement => "movement",
            Stage::Render => "render",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    level: LevelConfig,
    time: SimTime,
    input_queue: VecDeque<InputEvent>,
    events: Vec<GameEvent>,
    frame: Frame,
    quit_requested: bool,
}

impl SimulationEngine {
    /// Validate the level and build its starting world: map, buttons,
    /// player, mouse, game state and spawn manager.
    pub fn new(config: SimConfig) -> Result<Self, LevelError> {
        config.level.validate()?;
        let mut world = World::new();
        world_setup::setup_level(&mut world, &config.level);
        Ok(Self::from_parts(world, config.level))
    }

    /// Engine around a caller-built world. The level is trusted as-is.
    pub fn with_world(world: World, level: LevelConfig) -> Self {
        Self::from_parts(world, level)
    }

    fn from_parts(world: World, level: LevelConfig) -> Self {
        Self {
            world,
            level,
            time: SimTime::default(),
            input_queue: VecDeque::new(),
            events: Vec::new(),
            frame: Frame::default(),
            quit_requested: false,
        }
    }

    /// Queue a raw input event for the next tick's input stage.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    /// Queue multiple input events.
    pub fn queue_inputs(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.input_queue.extend(events);
    }

    /// Advance the simulation by exactly one fixed step and return the frame.
    pub fn tick(&mut self) -> Frame {
        for stage in PIPELINE {
            let started = Instant::now();
            self.run_stage(stage);
            trace!(
                %stage,
                tick = self.time.tick,
                elapsed_us = started.elapsed().as_micros() as u64,
                "stage done"
            );
        }
        self.time.advance();

        let mut frame = std::mem::take(&mut self.frame);
        frame.time = self.time;
        frame.events = std::mem::take(&mut self.events);
        frame
    }

    /// Run a single stage against the current world without advancing time.
    pub fn run_stage(&mut self, stage: Stage) {
        let world = &mut self.world;
        let level = &self.level;
        let events = &mut self.events;
        match stage {
            Stage::Input => {
                if systems::input::run(world, &mut self.input_queue) {
                    self.quit_requested = true;
                }
            }
            Stage::UiHitTest => systems::ui::run(world),
            Stage::TowerPlacement => systems::placement::run(world, level, events),
            Stage::Wave => systems::wave::run(world, level, events),
            Stage::PathNavigation => systems::path::run(world, level),
            Stage::Endpoint => systems::endpoint::run(world, level, events),
            Stage::Targeting => systems::targeting::run(world, level),
            Stage::Shooting => systems::shooting::run(world, level, events),
            Stage::Travel => systems::travel::run(world),
            Stage::BulletHit => systems::bullet_hit::run(world, events),
            Stage::Movement => systems::movement::run(world),
            Stage::Render => systems::render::run(world, &mut self.frame),
        }
    }

    /// True once a quit event has been processed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scenario setup in tests and tools.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Events recorded by stages run since the last `tick`.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
