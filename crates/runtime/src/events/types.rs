//! Event types for different topics.

use game_core::{LevelStatus, MoveOutcome, PlayerId};
use serde::{Deserialize, Serialize};

/// Session state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Started,
    Stopped,
    /// The last move decided the game; the session has stopped itself.
    Finished {
        status: LevelStatus,
        scores: Vec<(PlayerId, u32)>,
    },
    /// A fresh level was loaded.
    Reset { remaining_pellets: usize },
}

/// A unit moved, or tried to, through the level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementEvent {
    pub outcome: MoveOutcome,
}
