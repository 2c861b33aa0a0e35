//! Tower placement system.
//!
//! While a buy intent is active the mouse carries a ghost of the tower.
//! A click inside the map bounds builds the tower and clears the intent;
//! a click anywhere else (other than on a UI button) is rejected and the
//! intent stays active.

use tracing::{info, warn};

use element_core::components::{Drawable, GameState, Mouse, MouseInput, Transform, UiIntent};
use element_core::enums::UiAction;
use element_core::events::GameEvent;
use element_core::level::LevelConfig;
use element_core::types::EntityId;

use crate::ecs::{Mask, World};
use crate::systems::ui;
use crate::world_setup;

pub fn run(world: &mut World, level: &LevelConfig, events: &mut Vec<GameEvent>) {
    let Some(mouse) = world.singleton(Mask::of::<(Mouse, MouseInput, Transform, Drawable)>())
    else {
        return;
    };
    let Some(state) = world.singleton(Mask::of::<(GameState, UiIntent)>()) else {
        return;
    };
    let Some(input) = world.get::<MouseInput>(mouse).copied() else {
        return;
    };
    let action = world
        .get::<UiIntent>(state)
        .map(|intent| intent.action)
        .unwrap_or_default();

    let Some(kind) = action.tower_kind() else {
        set_ghost(world, mouse, Drawable::default());
        return;
    };
    let stats = level.towers.stats(kind);
    set_ghost(world, mouse, Drawable::scaled(stats.sprite, level.tex_scale));

    if !input.clicked {
        return;
    }
    if !level.map_bounds.contains(input.position) {
        // The click that picked the tower lands on its button.
        if ui::button_at(world, input.position).is_none() {
            warn!(
                ?kind,
                x = input.position.x,
                y = input.position.y,
                "tower placement rejected: outside map"
            );
        }
        return;
    }

    let tower = world_setup::spawn_tower(world, kind, stats, input.position, level.tex_scale);
    info!(%tower, ?kind, x = input.position.x, y = input.position.y, "tower placed");
    events.push(GameEvent::TowerPlaced {
        entity: tower,
        kind,
        position: input.position,
    });

    if let Some(intent) = world.get_mut::<UiIntent>(state) {
        intent.action = UiAction::None;
    }
    set_ghost(world, mouse, Drawable::default());
}

fn set_ghost(world: &mut World, mouse: EntityId, ghost: Drawable) {
    if let Some(drawable) = world.get_mut::<Drawable>(mouse) {
        *drawable = ghost;
    }
}
