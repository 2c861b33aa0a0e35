//! Shooting system: towers off cooldown fire at their current target.

use tracing::trace;

use element_core::components::{Creep, Damage, FireRate, Target, Transform};
use element_core::constants::{DT, TIME_EPSILON};
use element_core::events::GameEvent;
use element_core::level::LevelConfig;

use crate::ecs::{Mask, World};
use crate::world_setup;

pub fn run(world: &mut World, level: &LevelConfig, events: &mut Vec<GameEvent>) {
    let creep_mask = Mask::of::<(Creep, Transform)>();

    for tower in world.query(Mask::of::<(Transform, Damage, FireRate, Target)>()) {
        let (Some(&transform), Some(&damage), Some(&rate), Some(&target)) = (
            world.get::<Transform>(tower),
            world.get::<Damage>(tower),
            world.get::<FireRate>(tower),
            world.get::<Target>(tower),
        ) else {
            continue;
        };

        if rate.cooldown > TIME_EPSILON {
            if let Some(r) = world.get_mut::<FireRate>(tower) {
                r.cooldown -= DT;
            }
            continue;
        }

        let Some(creep) = target.entity else {
            continue;
        };
        let Some(creep_position) = world
            .get::<Transform>(creep)
            .filter(|_| world.matches(creep, creep_mask))
            .map(|t| t.position)
        else {
            if let Some(t) = world.get_mut::<Target>(tower) {
                *t = Target::NONE;
            }
            continue;
        };

        let (bullet, travel_time) = world_setup::spawn_bullet(
            world,
            transform.position,
            creep_position,
            damage.value,
            creep,
            level.bullet_sprite,
            level.tex_scale,
        );
        if let Some(r) = world.get_mut::<FireRate>(tower) {
            r.cooldown = r.interval;
        }

        trace!(%tower, %creep, %bullet, travel_time, "projectile fired");
        events.push(GameEvent::ProjectileFired {
            tower,
            target: creep,
            travel_time,
        });
    }
}
