/// Scoring rules and compile-time limits of the classic rule set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Points awarded for an ordinary pellet.
    pub pellet_value: u32,
    /// Points awarded for a bonus item (fruit).
    pub bonus_value: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum occupants stacked on one cell (units plus collectibles).
    pub const MAX_OCCUPANTS_PER_TILE: usize = 8;
    /// Maximum players a level can host at once.
    pub const MAX_PLAYERS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PELLET_VALUE: u32 = 10;
    pub const DEFAULT_BONUS_VALUE: u32 = 1000;

    pub fn new() -> Self {
        Self {
            pellet_value: Self::DEFAULT_PELLET_VALUE,
            bonus_value: Self::DEFAULT_BONUS_VALUE,
        }
    }

    pub fn with_values(pellet_value: u32, bonus_value: u32) -> Self {
        Self {
            pellet_value,
            bonus_value,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
