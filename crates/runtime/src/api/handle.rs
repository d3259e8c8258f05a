//! Cloneable façade for issuing commands to the runtime.
//!
//! [`GameHandle`] hides channel plumbing and mirrors the synchronous
//! [`game_core::GameSession`] API as async calls. Every call is answered by
//! the simulation worker after all earlier commands have been applied.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{
    Direction, GameStatus, Level, LevelSource, LevelStatus, MoveReport, Player, PlayerId,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Point-in-time copy of the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub outcome: Option<LevelStatus>,
    pub level: Level,
}

impl GameSnapshot {
    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn players(&self) -> &[Player] {
        self.level.players()
    }
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct GameHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl GameHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Returns whether the game was started by this call.
    pub async fn start(&self) -> Result<bool> {
        self.request(|reply| Command::Start { reply }).await
    }

    /// Returns whether the game was stopped by this call.
    ///
    /// Once this resolves no further monster tick is applied.
    pub async fn stop(&self) -> Result<bool> {
        self.request(|reply| Command::Stop { reply }).await
    }

    pub async fn reset(&self) -> Result<()> {
        self.request(|reply| Command::Reset {
            source: None,
            reply,
        })
        .await?
    }

    /// Reset and keep using `source` for later resets.
    pub async fn reset_with(&self, source: Arc<dyn LevelSource>) -> Result<()> {
        self.request(|reply| Command::Reset {
            source: Some(source),
            reply,
        })
        .await?
    }

    pub async fn move_player(&self, player: PlayerId, direction: Direction) -> Result<MoveReport> {
        self.request(|reply| Command::MovePlayer {
            player,
            direction,
            reply,
        })
        .await?
    }

    /// Tick every monster once, regardless of the timers.
    pub async fn tick_monsters(&self) -> Result<Vec<MoveReport>> {
        self.request(|reply| Command::TickMonsters { reply }).await?
    }

    pub async fn is_in_progress(&self) -> Result<bool> {
        Ok(self.status().await? == GameStatus::InProgress)
    }

    pub async fn status(&self) -> Result<GameStatus> {
        let (status, _) = self.request(|reply| Command::QueryStatus { reply }).await?;
        Ok(status)
    }

    /// How the last game ended, `None` while undecided.
    pub async fn outcome(&self) -> Result<Option<LevelStatus>> {
        let (_, outcome) = self.request(|reply| Command::QueryStatus { reply }).await?;
        Ok(outcome)
    }

    pub async fn players(&self) -> Result<Vec<Player>> {
        Ok(self.snapshot().await?.level.players().to_vec())
    }

    pub async fn level(&self) -> Result<Level> {
        Ok(self.snapshot().await?.level)
    }

    /// Query the current session state (read-only copy)
    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Lifecycle` - Start, stop, finish and reset
    /// - `Topic::Movement` - Every resolved move
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
