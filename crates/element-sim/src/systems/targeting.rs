//! Targeting system: each tower keeps or picks one creep to shoot at.

use glam::Vec2;

use element_core::components::{Creep, Range, Target, Transform, WaypointIndex};
use element_core::level::LevelConfig;
use element_core::types::EntityId;

use crate::ecs::{Mask, World};

/// A creep as seen by the targeting pass.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub entity: EntityId,
    pub position: Vec2,
    pub waypoint_index: usize,
}

pub fn run(world: &mut World, level: &LevelConfig) {
    let creep_mask = Mask::of::<(Creep, Transform, WaypointIndex)>();
    let candidates: Vec<Candidate> = world
        .query(creep_mask)
        .into_iter()
        .filter_map(|entity| {
            Some(Candidate {
                entity,
                position: world.get::<Transform>(entity)?.position,
                waypoint_index: world.get::<WaypointIndex>(entity)?.index,
            })
        })
        .collect();

    for tower in world.query(Mask::of::<(Transform, Range, Target)>()) {
        let (Some(transform), Some(range), Some(target)) = (
            world.get::<Transform>(tower),
            world.get::<Range>(tower),
            world.get::<Target>(tower),
        ) else {
            continue;
        };
        let origin = transform.position;
        let range_sq = range.radius * range.radius;

        // The previous target may have died or been recycled since last tick.
        let mut current = target.entity.filter(|&id| {
            world.matches(id, creep_mask)
                && world
                    .get::<Transform>(id)
                    .is_some_and(|t| t.position.distance_squared(origin) <= range_sq)
        });

        if current.is_none() {
            current = select_target(&candidates, origin, range_sq, &level.waypoints);
        }

        if let Some(target) = world.get_mut::<Target>(tower) {
            target.entity = current;
        }
    }
}

/// Best creep within range: the one furthest along the path, ties broken
/// by the smaller squared distance to its next waypoint. On an exact tie
/// the earlier candidate wins.
pub fn select_target(
    candidates: &[Candidate],
    origin: Vec2,
    range_sq: f32,
    waypoints: &[Vec2],
) -> Option<EntityId> {
    let mut best: Option<(usize, f32, EntityId)> = None;

    for c in candidates {
        if c.position.distance_squared(origin) > range_sq {
            continue;
        }
        let to_next = waypoints
            .get(c.waypoint_index)
            .map_or(0.0, |w| w.distance_squared(c.position));

        let better = match best {
            None => true,
            Some((index, dist, _)) => {
                c.waypoint_index > index || (c.waypoint_index == index && to_next < dist)
            }
        };
        if better {
            best = Some((c.waypoint_index, to_next, c.entity));
        }
    }

    best.map(|(_, _, entity)| entity)
}
