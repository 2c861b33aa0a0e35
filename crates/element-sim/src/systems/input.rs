//! Input system: drains the raw input queued since the last tick into the
//! mouse singleton and keyboard shortcuts into the UI intent.

use std::collections::VecDeque;

use glam::Vec2;
use tracing::{debug, trace, warn};

use element_core::components::{GameState, Mouse, MouseInput, Transform, UiIntent};
use element_core::enums::UiAction;
use element_core::input::{InputEvent, Scancode};

use crate::ecs::{Mask, World};

/// Apply every pending event. The click flag only survives one tick.
/// Returns true if a quit was requested.
pub fn run(world: &mut World, pending: &mut VecDeque<InputEvent>) -> bool {
    let mouse = world.singleton(Mask::of::<(Mouse, MouseInput, Transform)>());
    let mut input = mouse
        .and_then(|m| world.get::<MouseInput>(m).copied())
        .unwrap_or_default();
    input.clicked = false;

    let mut quit = false;
    let mut shortcut_action = None;

    for event in pending.drain(..) {
        match event {
            InputEvent::Quit => quit = true,
            InputEvent::MouseMove { x, y } => input.position = Vec2::new(x, y),
            InputEvent::MouseDown { x, y } => {
                input.position = Vec2::new(x, y);
                input.clicked = true;
            }
            InputEvent::KeyDown { scancode } => match shortcut(scancode) {
                Some(action) => shortcut_action = Some(action),
                None => trace!(?scancode, "key without binding"),
            },
        }
    }

    match mouse {
        Some(mouse) => {
            if let Some(slot) = world.get_mut::<MouseInput>(mouse) {
                *slot = input;
            }
            if let Some(transform) = world.get_mut::<Transform>(mouse) {
                transform.position = input.position;
            }
        }
        None if input.clicked => warn!("click dropped: no mouse entity"),
        None => {}
    }

    if let Some(action) = shortcut_action {
        match world.singleton(Mask::of::<(GameState, UiIntent)>()) {
            Some(state) => {
                if let Some(intent) = world.get_mut::<UiIntent>(state) {
                    debug!(?action, "intent set from keyboard");
                    intent.action = action;
                }
            }
            None => warn!(?action, "shortcut dropped: no game state entity"),
        }
    }

    quit
}

/// Keyboard binding for a key, if it has one.
pub fn shortcut(scancode: Scancode) -> Option<UiAction> {
    match scancode {
        Scancode::Digit1 => Some(UiAction::BuyArrow),
        Scancode::Digit2 => Some(UiAction::BuyCannon),
        Scancode::Digit3 => Some(UiAction::BuyAir),
        Scancode::N => Some(UiAction::AdvanceLevel),
        Scancode::Escape => Some(UiAction::None),
        Scancode::Other(_) => None,
    }
}
