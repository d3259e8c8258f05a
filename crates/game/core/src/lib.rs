//! Deterministic rules for a grid arcade game.
//!
//! `game-core` owns the board model, units, collectibles and the level that
//! resolves every move. [`GameSession`] wraps a level in a start/stop state
//! machine and drives monsters through pluggable [`MovementPolicy`]s. The
//! crate does no I/O and knows nothing about time; the runtime decides when
//! monsters tick.
pub mod board;
pub mod collectible;
pub mod config;
pub mod game;
pub mod level;
pub mod policy;
pub mod types;
pub mod unit;

#[cfg(test)]
mod test_support;

pub use board::{Board, BoardError, Cell, Occupant, Terrain};
pub use collectible::{Collectible, CollectibleKind};
pub use config::GameConfig;
pub use game::{
    GameError, GameSession, GameStatus, GameVariant, MoveReport, MultiPlayer, SinglePlayer,
};
pub use level::{
    Collision, Level, LevelBuilder, LevelError, LevelSource, LevelStatus, LevelTemplate, MoveKind,
    MoveOutcome,
};
pub use policy::{
    Ambush, ClassicPolicies, Fallback, MovementPolicy, PolicyFactory, Pursuit, RandomWalk,
    Scripted, Shy,
};
pub use types::{CollectibleId, Direction, MonsterId, PlayerId, Position, UnitId};
pub use unit::{Monster, MonsterKind, Player};
