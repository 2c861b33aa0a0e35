//! Input source collaborator.
//!
//! The loop polls the source once per tick and forwards every event to the
//! engine. `ScriptedInput` replays a fixed schedule; `AutoPlayer` is a
//! seeded demo driver that buys towers and advances waves on its own.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use element_core::enums::TowerKind;
use element_core::input::{InputEvent, Scancode};
use element_core::types::Rect;

/// Produces the raw events observed since the previous poll.
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Replays events keyed by poll number (0 is the first poll).
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: BTreeMap<u64, Vec<InputEvent>>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` on poll `poll`, after any event already scheduled there.
    pub fn at(mut self, poll: u64, event: InputEvent) -> Self {
        self.script.entry(poll).or_default().push(event);
        self
    }

    /// A click is a move followed by a press at the same point.
    pub fn click_at(self, poll: u64, point: Vec2) -> Self {
        self.at(poll, InputEvent::MouseMove { x: point.x, y: point.y })
            .at(poll, InputEvent::MouseDown { x: point.x, y: point.y })
    }

    pub fn key_at(self, poll: u64, scancode: Scancode) -> Self {
        self.at(poll, InputEvent::KeyDown { scancode })
    }

    /// True once every scheduled event has been delivered.
    pub fn is_finished(&self) -> bool {
        self.script.keys().all(|&poll| poll < self.polls)
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let events = self.script.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }
}

/// Number of polls between autoplay decisions.
pub const AUTOPLAY_DECISION_POLLS: u64 = 45;

/// Chance that a decision presses the next-level key instead of buying.
const ADVANCE_CHANCE: f64 = 0.25;

/// Seeded headless player. Every few polls it either requests the next
/// wave or selects a random tower kind and clicks a random point on the
/// map one poll later. The same seed and map reproduce the same session.
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: ChaCha8Rng,
    map_bounds: Rect,
    polls: u64,
    pending: Option<Vec2>,
}

impl AutoPlayer {
    pub fn new(seed: u64, map_bounds: Rect) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            map_bounds,
            polls: 0,
            pending: None,
        }
    }

    fn random_map_point(&mut self) -> Vec2 {
        let b = self.map_bounds;
        Vec2::new(
            self.rng.gen_range(b.x..b.right()),
            self.rng.gen_range(b.y..b.bottom()),
        )
    }

    fn decide(&mut self) -> InputEvent {
        if self.polls == 0 || self.rng.gen_bool(ADVANCE_CHANCE) {
            return InputEvent::KeyDown { scancode: Scancode::N };
        }
        let kind = TowerKind::ALL[self.rng.gen_range(0..TowerKind::ALL.len())];
        self.pending = Some(self.random_map_point());
        InputEvent::KeyDown {
            scancode: buy_key(kind),
        }
    }
}

fn buy_key(kind: TowerKind) -> Scancode {
    match kind {
        TowerKind::Arrow => Scancode::Digit1,
        TowerKind::Cannon => Scancode::Digit2,
        TowerKind::Air => Scancode::Digit3,
    }
}

impl InputSource for AutoPlayer {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if let Some(point) = self.pending.take() {
            events.push(InputEvent::MouseMove { x: point.x, y: point.y });
            events.push(InputEvent::MouseDown { x: point.x, y: point.y });
        } else if self.polls % AUTOPLAY_DECISION_POLLS == 0 {
            events.push(self.decide());
        }
        self.polls += 1;
        events
    }
}
