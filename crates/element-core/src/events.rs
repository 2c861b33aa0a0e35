//! Events emitted by the simulation for HUD feedback and logging.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave moved from idle to spawning. `wave_index` is 0-based.
    WaveStarted { wave_index: usize, count: u32 },
    /// An advance was requested after the last configured wave.
    WavesExhausted,
    CreepSpawned { entity: EntityId, wave_index: usize },
    /// A creep reached the end of the path and was recycled to the start.
    CreepLeaked {
        entity: EntityId,
        hp_after: i32,
        gold_after: i32,
    },
    CreepKilled { entity: EntityId },
    TowerPlaced {
        entity: EntityId,
        kind: TowerKind,
        position: Vec2,
    },
    ProjectileFired {
        tower: EntityId,
        target: EntityId,
        travel_time: f32,
    },
    /// A projectile's flight time elapsed. `hit` is false when the target
    /// was already gone.
    ProjectileResolved { target: EntityId, hit: bool },
}
