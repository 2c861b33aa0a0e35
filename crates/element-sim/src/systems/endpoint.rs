//! Endpoint system: creeps that ran the whole path cost the player HP and
//! gold, then go round again from the start as the same entity.

use glam::Vec2;
use tracing::debug;

use element_core::components::*;
use element_core::constants::{FIRST_WAYPOINT_TARGET, LEAK_HP_PENALTY};
use element_core::events::GameEvent;
use element_core::level::LevelConfig;

use crate::ecs::{Mask, World};

pub fn run(world: &mut World, level: &LevelConfig, events: &mut Vec<GameEvent>) {
    let Some(player) = world.singleton(Mask::of::<(Player, Hp, Gold)>()) else {
        return;
    };
    let path_len = level.path_len();
    let start = level.path_start();

    for creep in world.query(Mask::of::<(Creep, WaypointIndex, Transform, GoldBounty)>()) {
        let arrived = world
            .get::<WaypointIndex>(creep)
            .is_some_and(|w| w.index >= path_len);
        if !arrived {
            continue;
        }
        let bounty = world.get::<GoldBounty>(creep).map_or(0, |b| b.value);

        let hp_after = match world.get_mut::<Hp>(player) {
            Some(hp) => {
                hp.current = (hp.current - LEAK_HP_PENALTY).max(0);
                hp.current
            }
            None => 0,
        };
        let gold_after = match world.get_mut::<Gold>(player) {
            Some(gold) => {
                gold.current = (gold.current - bounty).max(0);
                gold.current
            }
            None => 0,
        };

        if let Some(t) = world.get_mut::<Transform>(creep) {
            t.position = start;
        }
        if let Some(w) = world.get_mut::<WaypointIndex>(creep) {
            w.index = FIRST_WAYPOINT_TARGET;
        }
        // Stale heading would carry the creep off the start point before
        // path navigation re-aims it next tick.
        if let Some(v) = world.get_mut::<Velocity>(creep) {
            v.vector = Vec2::ZERO;
        }

        debug!(%creep, hp_after, gold_after, "creep leaked");
        events.push(GameEvent::CreepLeaked {
            entity: creep,
            hp_after,
            gold_after,
        });
    }
}
