//! Simulation engine for ELEMENT.
//!
//! Owns a hand-rolled ECS world, runs the twelve systems in a fixed order
//! at a fixed tick rate, and produces `Frame`s for the render surface.

pub mod ecs;
pub mod engine;
pub mod error;
pub mod systems;
pub mod world_setup;

pub use element_core as core;
pub use engine::{SimConfig, SimulationEngine, Stage, PIPELINE};
pub use error::EcsError;
