//! Raw input events delivered by the input collaborator once per frame.
//!
//! Events are queued on the engine and drained by the input stage at the
//! start of the next tick.

use serde::{Deserialize, Serialize};

/// Keys the simulation reacts to. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scancode {
    Digit1,
    Digit2,
    Digit3,
    N,
    Escape,
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Window closed or terminate requested.
    Quit,
    MouseMove { x: f32, y: f32 },
    MouseDown { x: f32, y: f32 },
    KeyDown { scancode: Scancode },
}
