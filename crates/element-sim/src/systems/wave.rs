//! Wave/spawn system.
//!
//! The spawn manager is either spawning (`remaining > 0`) or idle. While
//! spawning it counts down and releases one creep per `spawn_delay`.
//! While idle it starts the next wave once the field is clear of creeps
//! and the player has asked to advance. Running past the end of the wave
//! table leaves it idle for good.

use tracing::{debug, info};

use element_core::components::*;
use element_core::constants::{DT, TIME_EPSILON};
use element_core::enums::UiAction;
use element_core::events::GameEvent;
use element_core::level::LevelConfig;

use crate::ecs::{Mask, World};
use crate::world_setup;

pub fn run(world: &mut World, level: &LevelConfig, events: &mut Vec<GameEvent>) {
    let Some(manager) = world.singleton(Mask::of::<(SpawnManager, SpawnState)>()) else {
        return;
    };
    let Some(mut state) = world.get::<SpawnState>(manager).copied() else {
        return;
    };

    if state.remaining > 0 {
        spawn_step(world, level, &mut state, events);
    } else {
        try_advance(world, level, &mut state, events);
    }

    if let Some(slot) = world.get_mut::<SpawnState>(manager) {
        *slot = state;
    }
}

fn spawn_step(
    world: &mut World,
    level: &LevelConfig,
    state: &mut SpawnState,
    events: &mut Vec<GameEvent>,
) {
    let Some((wave_index, wave)) = state
        .wave_index
        .and_then(|i| level.waves.get(i).map(|wave| (i, wave)))
    else {
        state.remaining = 0;
        return;
    };

    state.time_until_next -= DT;
    if state.time_until_next > TIME_EPSILON {
        return;
    }

    let creep = world_setup::spawn_creep(world, wave, level.path_start(), level.tex_scale);
    state.remaining -= 1;
    state.time_until_next = wave.spawn_delay;
    debug!(%creep, wave_index, remaining = state.remaining, "creep spawned");
    events.push(GameEvent::CreepSpawned {
        entity: creep,
        wave_index,
    });
}

fn try_advance(
    world: &mut World,
    level: &LevelConfig,
    state: &mut SpawnState,
    events: &mut Vec<GameEvent>,
) {
    if world.find_first(Mask::of::<(Creep,)>()).is_some() {
        return;
    }
    let Some(game_state) = world.singleton(Mask::of::<(GameState, UiIntent)>()) else {
        return;
    };
    let requested = world
        .get::<UiIntent>(game_state)
        .is_some_and(|intent| intent.action == UiAction::AdvanceLevel);
    if !requested {
        return;
    }

    let next = state.wave_index.map_or(0, |i| i + 1);
    if let Some(wave) = level.waves.get(next) {
        state.wave_index = Some(next);
        state.remaining = wave.count;
        state.time_until_next = 0.0;
        if let Some(current) = world.get_mut::<CurrentLevel>(game_state) {
            current.level = next as u32 + 1;
        }
        info!(wave_index = next, count = wave.count, "wave started");
        events.push(GameEvent::WaveStarted {
            wave_index: next,
            count: wave.count,
        });
    } else if state.wave_index != Some(level.waves.len()) {
        state.wave_index = Some(level.waves.len());
        info!(waves = level.waves.len(), "wave table exhausted");
        events.push(GameEvent::WavesExhausted);
    }

    if let Some(intent) = world.get_mut::<UiIntent>(game_state) {
        intent.action = UiAction::None;
    }
}
