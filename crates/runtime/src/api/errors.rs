//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and the game session so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::GameError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a game session before building")]
    MissingSession,

    #[error(transparent)]
    Game(#[from] GameError),
}
