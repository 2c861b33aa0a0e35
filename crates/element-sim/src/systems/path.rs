//! Path navigation: steer each creep toward its next waypoint.

use element_core::components::{Creep, Speed, Transform, Velocity, WaypointIndex};
use element_core::constants::WAYPOINT_SNAP_RADIUS;
use element_core::level::LevelConfig;
use element_core::types::{direction_to, facing_degrees};

use crate::ecs::{Mask, World};

/// A creep within the snap radius of its waypoint advances and re-aims at
/// the following one in the same tick. A step longer than twice the radius
/// can jump across the snap circle, which `LevelConfig::validate` rejects.
/// Creeps past the last waypoint are left to the endpoint system.
pub fn run(world: &mut World, level: &LevelConfig) {
    let path = &level.waypoints;
    let snap_sq = WAYPOINT_SNAP_RADIUS * WAYPOINT_SNAP_RADIUS;

    for creep in world.query(Mask::of::<(Creep, Transform, Speed, WaypointIndex, Velocity)>()) {
        let (Some(&transform), Some(&speed), Some(&waypoint)) = (
            world.get::<Transform>(creep),
            world.get::<Speed>(creep),
            world.get::<WaypointIndex>(creep),
        ) else {
            continue;
        };

        let mut index = waypoint.index;
        let Some(mut target) = path.get(index).copied() else {
            continue;
        };

        if transform.position.distance_squared(target) <= snap_sq {
            index += 1;
            if let Some(w) = world.get_mut::<WaypointIndex>(creep) {
                w.index = index;
            }
            match path.get(index) {
                Some(&next) => target = next,
                None => continue,
            }
        }

        let velocity = direction_to(transform.position, target) * speed.value;
        if let Some(v) = world.get_mut::<Velocity>(creep) {
            v.vector = velocity;
        }
        if let Some(t) = world.get_mut::<Transform>(creep) {
            t.facing_deg = facing_degrees(velocity);
        }
    }
}
