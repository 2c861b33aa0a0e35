//! UI hit-test system: turns a click on a button into a UI intent.

use glam::Vec2;
use tracing::debug;

use element_core::components::*;
use element_core::enums::UiAction;
use element_core::types::{EntityId, Rect};

use crate::ecs::{Component, Mask, World};

pub fn run(world: &mut World) {
    let Some(mouse) = world.singleton(Mask::of::<(Mouse, MouseInput)>()) else {
        return;
    };
    let Some(input) = world.get::<MouseInput>(mouse).copied() else {
        return;
    };
    if !input.clicked {
        return;
    }

    let Some(state) = world.singleton(Mask::of::<(GameState, UiIntent)>()) else {
        return;
    };
    let Some(mut action) = world.get::<UiIntent>(state).map(|intent| intent.action) else {
        return;
    };
    // A pending advance never outlives the next click.
    if action == UiAction::AdvanceLevel {
        action = UiAction::None;
    }

    if let Some(button) = button_at(world, input.position) {
        if let Some(pressed) = button_action(world.mask(button)) {
            debug!(%button, ?pressed, "button clicked");
            action = pressed;
        }
    }

    if let Some(intent) = world.get_mut::<UiIntent>(state) {
        intent.action = action;
    }
}

/// First button (lowest index) whose box contains `point`. Boxes are
/// centered on the transform and sized by the drawable, edges inclusive.
pub fn button_at(world: &World, point: Vec2) -> Option<EntityId> {
    world
        .query(Mask::of::<(UiButton, Transform, Drawable)>())
        .into_iter()
        .find(|&button| {
            match (world.get::<Transform>(button), world.get::<Drawable>(button)) {
                (Some(t), Some(d)) => Rect::centered(t.position, d.size).contains(point),
                _ => false,
            }
        })
}

/// Action bound to a button, decided by its category tag.
pub fn button_action(mask: Mask) -> Option<UiAction> {
    if mask.has(ArrowTower::BIT) {
        Some(UiAction::BuyArrow)
    } else if mask.has(CannonTower::BIT) {
        Some(UiAction::BuyCannon)
    } else if mask.has(AirTower::BIT) {
        Some(UiAction::BuyAir)
    } else if mask.has(NextLevelButton::BIT) {
        Some(UiAction::AdvanceLevel)
    } else {
        None
    }
}
