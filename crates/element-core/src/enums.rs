//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Action the player has requested through the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiAction {
    #[default]
    None,
    BuyArrow,
    BuyCannon,
    BuyAir,
    AdvanceLevel,
}

impl UiAction {
    /// Tower kind this action buys, if it is a buy action.
    pub fn tower_kind(self) -> Option<TowerKind> {
        match self {
            UiAction::BuyArrow => Some(TowerKind::Arrow),
            UiAction::BuyCannon => Some(TowerKind::Cannon),
            UiAction::BuyAir => Some(TowerKind::Air),
            UiAction::None | UiAction::AdvanceLevel => None,
        }
    }
}

/// The purchasable tower types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    Arrow,
    Cannon,
    Air,
}

impl TowerKind {
    pub const ALL: [TowerKind; 3] = [TowerKind::Arrow, TowerKind::Cannon, TowerKind::Air];

    pub fn buy_action(self) -> UiAction {
        match self {
            TowerKind::Arrow => UiAction::BuyArrow,
            TowerKind::Cannon => UiAction::BuyCannon,
            TowerKind::Air => UiAction::BuyAir,
        }
    }
}

/// Category of a clickable UI button. Maps one-to-one onto a tag component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    Buy(TowerKind),
    NextLevel,
}

impl ButtonKind {
    pub fn action(self) -> UiAction {
        match self {
            ButtonKind::Buy(kind) => kind.buy_action(),
            ButtonKind::NextLevel => UiAction::AdvanceLevel,
        }
    }
}
