//! Hand-rolled entity-component store.
//!
//! Entities are generational ids; components live in per-type tables and
//! an entity's shape is a bitmask over registered component types.

pub mod component;
pub mod entity;
pub mod mask;
pub mod storage;
pub mod world;

pub use component::{Bundle, Component, Tables};
pub use entity::EntityAllocator;
pub use mask::Mask;
pub use storage::{ComponentStorage, PackedStorage, SparseStorage};
pub use world::World;
