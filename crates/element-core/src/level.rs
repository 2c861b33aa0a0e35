//! Static level configuration: path, wave table, tower stats, map bounds
//! and UI layout. Loaded once before the loop starts and read-only after.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{ButtonKind, TowerKind};
use crate::types::Rect;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed level JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid level: {0}")]
    Invalid(String),
}

/// One batch of creeps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub count: u32,
    /// Seconds between consecutive spawns.
    pub spawn_delay: f32,
    pub speed: f32,
    pub hp: i32,
    pub gold_bounty: i32,
    pub sprite: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerStats {
    pub range: f32,
    pub damage: i32,
    /// Seconds between shots.
    pub fire_interval: f32,
    pub sprite: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerTable {
    pub arrow: TowerStats,
    pub cannon: TowerStats,
    pub air: TowerStats,
}

impl TowerTable {
    pub fn stats(&self, kind: TowerKind) -> &TowerStats {
        match kind {
            TowerKind::Arrow => &self.arrow,
            TowerKind::Cannon => &self.cannon,
            TowerKind::Air => &self.air,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub kind: ButtonKind,
    pub center: Vec2,
    pub sprite: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub hp: i32,
    pub gold: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            hp: PLAYER_START_HP,
            gold: PLAYER_START_GOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Screen-space path. Creeps spawn on `waypoints[0]`.
    pub waypoints: Vec<Vec2>,
    pub waves: Vec<WaveConfig>,
    pub towers: TowerTable,
    /// Towers can only be placed inside this rectangle.
    pub map_bounds: Rect,
    pub map_sprite: Rect,
    pub bullet_sprite: Rect,
    pub buttons: Vec<ButtonConfig>,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default = "default_tex_scale")]
    pub tex_scale: f32,
}

fn default_tex_scale() -> f32 {
    TEX_SCALE
}

/// Map-texture pixel coordinates to screen coordinates.
pub fn map_to_screen(map_x: f32, map_y: f32) -> Vec2 {
    Vec2::new(MAP_PAD_X + map_x * TEX_SCALE, MAP_PAD_Y + map_y * TEX_SCALE)
}

const MAP_SPRITE: Rect = Rect::new(0.0, 523.0, 383.0, 399.0);
const SHEEP_SPRITE: Rect = Rect::new(321.0, 25.0, 52.0, 32.0);
const RABID_SPRITE: Rect = Rect::new(373.0, 30.0, 52.0, 32.0);

impl Default for LevelConfig {
    /// The stock level.
    fn default() -> Self {
        let turns: [(f32, f32); 14] = [
            (125.0, 1.0),
            (125.0, 50.0),
            (48.0, 53.0),
            (45.0, 190.0),
            (125.0, 190.0),
            (128.0, 131.0),
            (244.0, 131.0),
            (247.0, 271.0),
            (48.0, 273.0),
            (48.0, 352.0),
            (325.0, 352.0),
            (324.0, 52.0),
            (204.0, 50.0),
            (204.0, 1.0),
        ];

        Self {
            waypoints: turns.iter().map(|&(x, y)| map_to_screen(x, y)).collect(),
            waves: vec![
                WaveConfig {
                    count: 10,
                    spawn_delay: 0.5,
                    speed: 100.0,
                    hp: 10,
                    gold_bounty: 1,
                    sprite: SHEEP_SPRITE,
                },
                WaveConfig {
                    count: 20,
                    spawn_delay: 0.5,
                    speed: 120.0,
                    hp: 20,
                    gold_bounty: 3,
                    sprite: RABID_SPRITE,
                },
            ],
            towers: TowerTable {
                arrow: TowerStats {
                    range: 200.0,
                    damage: 6,
                    fire_interval: 0.5,
                    sprite: Rect::new(0.0, 25.0, 28.0, 25.0),
                },
                cannon: TowerStats {
                    range: 100.0,
                    damage: 10,
                    fire_interval: 2.0,
                    sprite: Rect::new(402.0, 0.0, 26.0, 25.0),
                },
                air: TowerStats {
                    range: 400.0,
                    damage: 3,
                    fire_interval: 0.1,
                    sprite: Rect::new(376.0, 0.0, 26.0, 25.0),
                },
            },
            map_bounds: Rect::new(
                MAP_PAD_X,
                MAP_PAD_Y,
                MAP_SPRITE.w * TEX_SCALE,
                MAP_SPRITE.h * TEX_SCALE,
            ),
            map_sprite: MAP_SPRITE,
            bullet_sprite: Rect::new(13.0, 0.0, 9.0, 9.0),
            buttons: vec![
                ButtonConfig {
                    kind: ButtonKind::Buy(TowerKind::Arrow),
                    center: Vec2::new(800.0, 380.0),
                    sprite: Rect::new(60.0, 25.0, 32.0, 32.0),
                },
                ButtonConfig {
                    kind: ButtonKind::Buy(TowerKind::Cannon),
                    center: Vec2::new(880.0, 380.0),
                    sprite: Rect::new(92.0, 25.0, 32.0, 32.0),
                },
                ButtonConfig {
                    kind: ButtonKind::Buy(TowerKind::Air),
                    center: Vec2::new(960.0, 380.0),
                    sprite: Rect::new(28.0, 25.0, 32.0, 32.0),
                },
                ButtonConfig {
                    kind: ButtonKind::NextLevel,
                    center: Vec2::new(790.0, 694.0),
                    sprite: Rect::new(0.0, 185.0, 62.0, 52.0),
                },
            ],
            player: PlayerConfig::default(),
            tex_scale: TEX_SCALE,
        }
    }
}

impl LevelConfig {
    /// Parse and validate a level from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let level: LevelConfig = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Read, parse and validate a level file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of waypoints. A creep whose index reaches this has arrived.
    pub fn path_len(&self) -> usize {
        self.waypoints.len()
    }

    /// Where creeps spawn and where leaked creeps are recycled to.
    pub fn path_start(&self) -> Vec2 {
        self.waypoints.first().copied().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if self.waypoints.len() < 2 {
            return Err(invalid("path needs at least two waypoints"));
        }
        if self.waypoints.iter().any(|p| !p.is_finite()) {
            return Err(invalid("waypoint coordinates must be finite"));
        }

        for (i, wave) in self.waves.iter().enumerate() {
            if wave.count == 0 {
                return Err(invalid(format!("wave {i}: count must be positive")));
            }
            if !non_negative(wave.spawn_delay) {
                return Err(invalid(format!("wave {i}: spawn delay must be >= 0")));
            }
            if !positive(wave.speed) {
                return Err(invalid(format!("wave {i}: speed must be positive")));
            }
            if wave.speed / TICK_RATE as f32 > MAX_STEP_PER_TICK {
                return Err(invalid(format!(
                    "wave {i}: speed {} overshoots waypoints (max {} px/s)",
                    wave.speed,
                    MAX_STEP_PER_TICK * TICK_RATE as f32
                )));
            }
            if wave.hp <= 0 {
                return Err(invalid(format!("wave {i}: hp must be positive")));
            }
            if wave.gold_bounty < 0 {
                return Err(invalid(format!("wave {i}: bounty must be >= 0")));
            }
        }

        for kind in TowerKind::ALL {
            let stats = self.towers.stats(kind);
            if !positive(stats.range) || !positive(stats.fire_interval) {
                return Err(invalid(format!(
                    "{kind:?} tower: range and fire interval must be positive"
                )));
            }
            if stats.damage < 0 {
                return Err(invalid(format!("{kind:?} tower: damage must be >= 0")));
            }
        }

        if self.map_bounds.is_empty() {
            return Err(invalid("map bounds must have positive width and height"));
        }
        if !positive(self.tex_scale) {
            return Err(invalid("texture scale must be positive"));
        }

        Ok(())
    }
}

/// Longest per-tick step that still lands inside every waypoint's snap circle.
const MAX_STEP_PER_TICK: f32 = 2.0 * WAYPOINT_SNAP_RADIUS;

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn invalid(reason: impl Into<String>) -> LevelError {
    LevelError::Invalid(reason.into())
}
