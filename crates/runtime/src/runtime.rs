//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive a game session.

use std::env;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_core::{GameSession, MonsterKind};

use crate::api::{GameHandle, Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, MonsterScheduler, SimulationWorker};

/// Tick interval of each monster kind.
///
/// Every tick waits for the kind's interval plus a random delay of up to
/// `jitter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempoConfig {
    pub blinky_interval: Duration,
    pub default_interval: Duration,
    pub jitter: Duration,
}

impl TempoConfig {
    /// Same interval for every kind and no jitter.
    pub fn uniform(interval: Duration) -> Self {
        Self {
            blinky_interval: interval,
            default_interval: interval,
            jitter: Duration::ZERO,
        }
    }

    pub fn interval_for(&self, kind: MonsterKind) -> Duration {
        match kind {
            MonsterKind::Blinky => self.blinky_interval,
            MonsterKind::Pinky | MonsterKind::Inky | MonsterKind::Clyde => self.default_interval,
        }
    }
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            blinky_interval: Duration::from_millis(250),
            default_interval: Duration::from_millis(200),
            jitter: Duration::from_millis(50),
        }
    }
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    pub tempo: TempoConfig,
    /// Drive monsters from timers while the game is in progress (default: true)
    pub autonomous_monsters: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            tempo: TempoConfig::default(),
            autonomous_monsters: true,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PACMAN_EVENT_BUFFER` - Capacity per event topic (default: 100)
    /// - `PACMAN_COMMAND_BUFFER` - Worker command queue size (default: 32)
    /// - `PACMAN_MONSTER_INTERVAL_MS` - One interval for every monster kind
    /// - `PACMAN_MONSTER_JITTER_MS` - Maximum random delay per tick (default: 50)
    /// - `PACMAN_AUTONOMOUS_MONSTERS` - Timer-driven monsters (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = parse::<usize>(lookup("PACMAN_EVENT_BUFFER")) {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = parse::<usize>(lookup("PACMAN_COMMAND_BUFFER")) {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(millis) = parse::<u64>(lookup("PACMAN_MONSTER_INTERVAL_MS")) {
            let interval = Duration::from_millis(millis.max(1));
            config.tempo.blinky_interval = interval;
            config.tempo.default_interval = interval;
        }
        if let Some(millis) = parse::<u64>(lookup("PACMAN_MONSTER_JITTER_MS")) {
            config.tempo.jitter = Duration::from_millis(millis);
        }
        if let Some(enable) = parse::<bool>(lookup("PACMAN_AUTONOMOUS_MONSTERS")) {
            config.autonomous_monsters = enable;
        }

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

/// Main runtime that hosts a game session.
///
/// Design: Runtime owns the worker task. [`GameHandle`] provides a
/// cloneable façade for clients.
pub struct Runtime {
    handle: GameHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> GameHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Completes once every outstanding [`GameHandle`] clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    session: Option<GameSession>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            session: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the game session the worker will own (required)
    pub fn session(mut self, session: GameSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let session = self.session.ok_or(RuntimeError::MissingSession)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let scheduler = self
            .config
            .autonomous_monsters
            .then(|| MonsterScheduler::new(self.config.tempo.clone(), command_tx.downgrade()));

        let handle = GameHandle::new(command_tx, event_bus.clone());
        let sim_worker = SimulationWorker::new(session, command_rx, event_bus, scheduler);

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
