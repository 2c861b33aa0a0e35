//! Damage resolution for projectiles whose flight time has elapsed.
//!
//! The target is looked up again here: another projectile earlier in the
//! same pass may already have killed it. Either way the projectile is gone
//! after this system sees it land. Killed creeps pay no bounty.

use tracing::debug;

use element_core::components::{Bullet, Creep, Damage, Hp, Target, Transform, TravelTime};
use element_core::constants::TIME_EPSILON;
use element_core::events::GameEvent;

use crate::ecs::{Mask, World};

pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    let creep_mask = Mask::of::<(Creep, Transform, Hp)>();

    for bullet in world.query(Mask::of::<(Bullet, TravelTime, Target, Damage)>()) {
        let landed = world
            .get::<TravelTime>(bullet)
            .is_some_and(|t| t.remaining <= TIME_EPSILON);
        if !landed {
            continue;
        }
        let target = world.get::<Target>(bullet).and_then(|t| t.entity);
        let damage = world.get::<Damage>(bullet).map_or(0, |d| d.value);
        world.destroy(bullet);

        let Some(creep) = target else {
            continue;
        };
        let hit = world.matches(creep, creep_mask);
        if hit {
            let hp_after = match world.get_mut::<Hp>(creep) {
                Some(hp) => {
                    hp.current -= damage;
                    hp.current
                }
                None => 0,
            };
            if hp_after <= 0 {
                world.destroy(creep);
                debug!(%creep, "creep killed");
                events.push(GameEvent::CreepKilled { entity: creep });
            }
        }

        debug!(%bullet, %creep, hit, "projectile resolved");
        events.push(GameEvent::ProjectileResolved {
            target: creep,
            hit,
        });
    }
}
