//! ECS components.
//!
//! Components are plain data structs with no behavior of their own.
//! Game logic lives in systems, not components. An entity's "kind" is
//! nothing more than the set of components attached to it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::UiAction;
use crate::types::{EntityId, Rect};

/// Screen-space position and facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Facing angle in degrees (0 = +x, clockwise on screen).
    pub facing_deg: f32,
}

impl Transform {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            facing_deg: 0.0,
        }
    }
}

/// Pixels per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub vector: Vec2,
}

/// Rendering-only: which atlas region to draw and how large.
/// An empty `source` means "draw nothing".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub source: Rect,
    pub size: Vec2,
}

impl Drawable {
    /// Drawable for an atlas region at the global texture scale.
    pub fn scaled(source: Rect, scale: f32) -> Self {
        Self {
            source,
            size: source.scaled_size(scale),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.source.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    pub value: f32,
}

/// Index of the next waypoint a creep is heading toward.
/// `index == path.len()` means the creep has arrived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointIndex {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hp {
    pub current: i32,
    pub max: i32,
}

impl Hp {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gold {
    pub current: i32,
}

/// Gold the player loses when this creep leaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldBounty {
    pub value: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
    pub value: i32,
}

/// Seconds between shots, and seconds until the next shot is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FireRate {
    pub interval: f32,
    pub cooldown: f32,
}

impl FireRate {
    /// Ready to fire on the first tick.
    pub fn ready(interval: f32) -> Self {
        Self {
            interval,
            cooldown: 0.0,
        }
    }
}

/// Weak reference to another entity. Must be re-validated every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub entity: Option<EntityId>,
}

impl Target {
    pub const NONE: Target = Target { entity: None };

    pub fn of(entity: EntityId) -> Self {
        Self {
            entity: Some(entity),
        }
    }
}

/// Seconds until a projectile lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTime {
    pub remaining: f32,
}

/// Spawn manager state. `wave_index` is `None` before the first wave starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnState {
    pub wave_index: Option<usize>,
    /// Creeps still to be spawned in the current wave.
    pub remaining: u32,
    pub time_until_next: f32,
}

/// 1-based level shown in the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentLevel {
    pub level: u32,
}

impl Default for CurrentLevel {
    fn default() -> Self {
        Self { level: 1 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiIntent {
    pub action: UiAction,
}

/// Latest pointer state. `clicked` is only true on the frame of the click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseInput {
    pub position: Vec2,
    pub clicked: bool,
}

// --- Tags ---

/// Marks an entity as an enemy creep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creep;

/// Marks the player singleton (carries Hp + Gold).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player;

/// Arrow tower kind. Also tags the "buy arrow" button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrowTower;

/// Cannon tower kind. Also tags the "buy cannon" button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannonTower;

/// Air tower kind. Also tags the "buy air" button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirTower;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiButton;

/// Tags the "next level" button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextLevelButton;

/// Marks the mouse-following singleton (carries MouseInput + ghost Drawable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mouse;

/// Marks the game-state singleton (carries UiIntent + CurrentLevel).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState;

/// Marks the spawn-manager singleton (carries SpawnState).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnManager;
