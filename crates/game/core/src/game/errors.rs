use crate::level::LevelError;
use crate::types::{MonsterId, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{variant} game cannot be played with {players} player(s)")]
    InvalidRoster {
        variant: &'static str,
        players: usize,
    },

    #[error("player {0} is not part of this game")]
    UnknownPlayer(PlayerId),

    #[error("monster {0} is not part of the current level")]
    UnknownMonster(MonsterId),

    #[error(transparent)]
    Level(#[from] LevelError),
}
