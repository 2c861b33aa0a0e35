//! ELEMENT application shell.
//!
//! Wires the simulation engine to its input and render collaborators and
//! runs the fixed-step game loop.

pub mod game_loop;
pub mod input;
pub mod surface;

pub use element_core as core;
pub use game_loop::{LoopConfig, RunSummary};
