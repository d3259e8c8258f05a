use crate::board::BoardError;
use crate::types::{PlayerId, Position, UnitId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("{0} is not part of this level")]
    UnknownUnit(UnitId),

    #[error("level has no player start positions")]
    NoStartPositions,

    #[error("player start {position} is not a passable cell")]
    InvalidStart { position: Position },

    #[error("{0} is already registered")]
    DuplicatePlayer(PlayerId),

    #[error("level already hosts the maximum of {limit} players")]
    TooManyPlayers { limit: usize },

    #[error("start {position} for {player} is occupied by another player")]
    StartOccupied { player: PlayerId, position: Position },
}
