//! Render/status system: build the draw list and HUD numbers for a frame.
//!
//! Draw order is entity index order, so the map (spawned first) sits under
//! everything else.

use element_core::components::*;
use element_core::state::{DrawCommand, Frame, StatusBar};
use element_core::types::Rect;

use crate::ecs::{Mask, World};

pub fn run(world: &World, frame: &mut Frame) {
    frame.draws = draw_list(world);
    frame.status = status_bar(world);
}

pub fn draw_list(world: &World) -> Vec<DrawCommand> {
    world
        .query(Mask::of::<(Transform, Drawable)>())
        .into_iter()
        .filter_map(|entity| {
            let transform = world.get::<Transform>(entity)?;
            let drawable = world.get::<Drawable>(entity)?;
            drawable.is_visible().then(|| DrawCommand {
                source: drawable.source,
                dest: Rect::centered(transform.position, drawable.size),
                rotation_deg: transform.facing_deg,
            })
        })
        .collect()
}

pub fn status_bar(world: &World) -> StatusBar {
    let mut status = StatusBar::default();
    if let Some(player) = world.singleton(Mask::of::<(Player, Hp, Gold)>()) {
        status.hp = world.get::<Hp>(player).map_or(0, |hp| hp.current);
        status.gold = world.get::<Gold>(player).map_or(0, |g| g.current);
    }
    if let Some(state) = world.singleton(Mask::of::<(GameState, CurrentLevel)>()) {
        status.level = world.get::<CurrentLevel>(state).map_or(0, |l| l.level);
    }
    status
}
