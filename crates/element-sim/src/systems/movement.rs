//! Kinematic integration system.
//!
//! Updates position from velocity each tick: position += velocity * dt.

use element_core::components::{Transform, Velocity};
use element_core::constants::DT;

use crate::ecs::{Mask, World};

/// Run explicit Euler integration for all entities with Transform + Velocity.
pub fn run(world: &mut World) {
    for entity in world.query(Mask::of::<(Transform, Velocity)>()) {
        let Some(velocity) = world.get::<Velocity>(entity).map(|v| v.vector) else {
            continue;
        };
        if let Some(transform) = world.get_mut::<Transform>(entity) {
            transform.position += velocity * DT;
        }
    }
}
