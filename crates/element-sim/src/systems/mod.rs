//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components. Anything a system
//! learns about another entity is re-checked through the world on every call.

pub mod bullet_hit;
pub mod endpoint;
pub mod input;
pub mod movement;
pub mod path;
pub mod placement;
pub mod render;
pub mod shooting;
pub mod targeting;
pub mod travel;
pub mod ui;
pub mod wave;
