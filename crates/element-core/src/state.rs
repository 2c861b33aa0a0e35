//! Per-frame output handed to the render collaborator.
//!
//! The core knows only geometry: atlas source regions, destination
//! rectangles and rotation. Pixel formats and textures stay outside.

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::types::{Rect, SimTime};

/// A single sprite blit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub source: Rect,
    pub dest: Rect,
    pub rotation_deg: f32,
}

/// Numbers shown in the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBar {
    pub hp: i32,
    pub gold: i32,
    pub level: u32,
}

/// Everything the render surface needs to present one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    pub time: SimTime,
    pub draws: Vec<DrawCommand>,
    pub status: StatusBar,
    pub events: Vec<GameEvent>,
}
