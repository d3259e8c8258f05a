//! Consumable, point-bearing items.

use crate::config::GameConfig;
use crate::types::{CollectibleId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectibleKind {
    Pellet,
    /// Fruit-style bonus item.
    Bonus,
}

impl CollectibleKind {
    /// Point value this kind is worth under the given scoring rules.
    pub fn value(self, config: &GameConfig) -> u32 {
        match self {
            CollectibleKind::Pellet => config.pellet_value,
            CollectibleKind::Bonus => config.bonus_value,
        }
    }
}

/// An item waiting on a cell until a player consumes it.
///
/// Collectibles are immutable; consumption removes them from the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collectible {
    id: CollectibleId,
    kind: CollectibleKind,
    value: u32,
    position: Position,
}

impl Collectible {
    pub(crate) fn new(
        id: CollectibleId,
        kind: CollectibleKind,
        value: u32,
        position: Position,
    ) -> Self {
        Self {
            id,
            kind,
            value,
            position,
        }
    }

    pub fn id(&self) -> CollectibleId {
        self.id
    }

    pub fn kind(&self) -> CollectibleKind {
        self.kind
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
