//! Core types and definitions for the Element tower-defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input events, game events, frame snapshots, constants and
//! the static level configuration. It has no dependency on the ECS store
//! or on any windowing/rendering framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod level;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
