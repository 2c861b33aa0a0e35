//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the map backdrop, UI buttons, the singleton entities, and the
//! creep / tower / projectile bundles used by the systems at runtime.

use glam::Vec2;

use element_core::components::*;
use element_core::constants::*;
use element_core::enums::{ButtonKind, TowerKind};
use element_core::level::{ButtonConfig, LevelConfig, TowerStats, WaveConfig};
use element_core::types::{direction_to, facing_degrees, EntityId, Rect};

use crate::ecs::World;

/// Populate an empty world with everything a level needs before the
/// first tick. Creeps and towers are spawned later by the systems.
pub fn setup_level(world: &mut World, level: &LevelConfig) {
    spawn_map(world, level);
    for button in &level.buttons {
        spawn_button(world, button, level.tex_scale);
    }
    spawn_player(world, level);
    spawn_mouse(world);
    spawn_game_state(world);
    spawn_spawn_manager(world);
}

/// The map backdrop, drawn first so everything else lands on top.
pub fn spawn_map(world: &mut World, level: &LevelConfig) -> EntityId {
    let bounds = level.map_bounds;
    let center = Vec2::new(bounds.x + bounds.w / 2.0, bounds.y + bounds.h / 2.0);
    world.spawn((
        Transform::at(center),
        Drawable {
            source: level.map_sprite,
            size: bounds.size(),
        },
    ))
}

pub fn spawn_button(world: &mut World, button: &ButtonConfig, scale: f32) -> EntityId {
    let transform = Transform::at(button.center);
    let drawable = Drawable::scaled(button.sprite, scale);
    match button.kind {
        ButtonKind::Buy(TowerKind::Arrow) => {
            world.spawn((UiButton, transform, drawable, ArrowTower))
        }
        ButtonKind::Buy(TowerKind::Cannon) => {
            world.spawn((UiButton, transform, drawable, CannonTower))
        }
        ButtonKind::Buy(TowerKind::Air) => world.spawn((UiButton, transform, drawable, AirTower)),
        ButtonKind::NextLevel => world.spawn((UiButton, transform, drawable, NextLevelButton)),
    }
}

pub fn spawn_player(world: &mut World, level: &LevelConfig) -> EntityId {
    world.spawn((
        Player,
        Hp::full(level.player.hp),
        Gold {
            current: level.player.gold,
        },
    ))
}

/// Mouse-following singleton. Its drawable is the placement ghost and
/// starts empty.
pub fn spawn_mouse(world: &mut World) -> EntityId {
    world.spawn((
        Mouse,
        MouseInput::default(),
        Transform::default(),
        Drawable::default(),
    ))
}

pub fn spawn_game_state(world: &mut World) -> EntityId {
    world.spawn((GameState, CurrentLevel::default(), UiIntent::default()))
}

/// Spawn manager, idle until the first advance request.
pub fn spawn_spawn_manager(world: &mut World) -> EntityId {
    world.spawn((SpawnManager, SpawnState::default()))
}

/// A creep at the path start, heading for the first waypoint after it.
pub fn spawn_creep(world: &mut World, wave: &WaveConfig, start: Vec2, scale: f32) -> EntityId {
    world.spawn((
        Creep,
        Transform::at(start),
        Drawable::scaled(wave.sprite, scale),
        WaypointIndex {
            index: FIRST_WAYPOINT_TARGET,
        },
        Velocity::default(),
        Speed { value: wave.speed },
        Hp::full(wave.hp),
        GoldBounty {
            value: wave.gold_bounty,
        },
    ))
}

/// A tower of `kind` at `position`, ready to fire on its first tick.
pub fn spawn_tower(
    world: &mut World,
    kind: TowerKind,
    stats: &TowerStats,
    position: Vec2,
    scale: f32,
) -> EntityId {
    let transform = Transform::at(position);
    let drawable = Drawable::scaled(stats.sprite, scale);
    let range = Range {
        radius: stats.range,
    };
    let damage = Damage {
        value: stats.damage,
    };
    let fire_rate = FireRate::ready(stats.fire_interval);
    let target = Target::NONE;

    match kind {
        TowerKind::Arrow => world.spawn((
            transform, drawable, range, damage, fire_rate, target, ArrowTower,
        )),
        TowerKind::Cannon => world.spawn((
            transform,
            drawable,
            range,
            damage,
            fire_rate,
            target,
            CannonTower,
        )),
        TowerKind::Air => {
            world.spawn((transform, drawable, range, damage, fire_rate, target, AirTower))
        }
    }
}

/// Fixed-time-of-flight projectile from `from` toward `to`.
///
/// The flight time is fixed at launch as `distance / BULLET_SPEED`;
/// damage lands when it elapses, wherever the projectile sprite is.
/// Returns the projectile and its flight time.
pub fn spawn_bullet(
    world: &mut World,
    from: Vec2,
    to: Vec2,
    damage: i32,
    target: EntityId,
    sprite: Rect,
    scale: f32,
) -> (EntityId, f32) {
    let direction = direction_to(from, to);
    let travel_time = from.distance(to) / BULLET_SPEED;
    let bullet = world.spawn((
        Bullet,
        Transform {
            position: from,
            facing_deg: facing_degrees(direction),
        },
        Drawable::scaled(sprite, scale),
        Velocity {
            vector: direction * BULLET_SPEED,
        },
        TravelTime {
            remaining: travel_time,
        },
        Damage { value: damage },
        Target::of(target),
    ));
    (bullet, travel_time)
}
