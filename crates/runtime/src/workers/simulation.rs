//! Simulation worker that owns the authoritative [`GameSession`].
//!
//! Receives commands from [`crate::GameHandle`] and from monster timer tasks
//! on a single channel, so moves are resolved strictly one at a time, and
//! publishes the results to the [`EventBus`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace, warn};

use game_core::{
    Direction, GameSession, GameStatus, LevelSource, LevelStatus, MonsterId, MoveReport, PlayerId,
};

use crate::api::{GameSnapshot, Result, RuntimeError};
use crate::events::{Event, EventBus, LifecycleEvent, MovementEvent};
use crate::workers::MonsterScheduler;

/// Commands that can be sent to the simulation worker
pub enum Command {
    Start {
        reply: oneshot::Sender<bool>,
    },
    Stop {
        reply: oneshot::Sender<bool>,
    },
    /// Reload from the current source, or switch to `source`.
    Reset {
        source: Option<Arc<dyn LevelSource>>,
        reply: oneshot::Sender<Result<()>>,
    },
    MovePlayer {
        player: PlayerId,
        direction: Direction,
        reply: oneshot::Sender<Result<MoveReport>>,
    },
    /// Tick every monster once, outside of the timers.
    TickMonsters {
        reply: oneshot::Sender<Result<Vec<MoveReport>>>,
    },
    /// Timer tick; dropped if `epoch` is no longer current.
    TickMonster { monster: MonsterId, epoch: u64 },
    QueryStatus {
        reply: oneshot::Sender<(GameStatus, Option<LevelStatus>)>,
    },
    QuerySnapshot {
        reply: oneshot::Sender<GameSnapshot>,
    },
}

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    session: GameSession,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    scheduler: Option<MonsterScheduler>,
}

impl SimulationWorker {
    pub fn new(
        session: GameSession,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        scheduler: Option<MonsterScheduler>,
    ) -> Self {
        info!(
            "SimulationWorker initialized with {} player(s), {} monster(s), {} collectible(s)",
            session.players().len(),
            session.level().monsters().len(),
            session.level().remaining_pellets()
        );

        Self {
            session,
            command_rx,
            event_bus,
            scheduler,
        }
    }

    /// Main worker loop; ends once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        self.disarm();
        debug!("SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start { reply } => {
                let started = self.handle_start();
                if reply.send(started).is_err() {
                    warn!("Start reply channel closed (caller dropped)");
                }
            }
            Command::Stop { reply } => {
                let stopped = self.handle_stop();
                if reply.send(stopped).is_err() {
                    warn!("Stop reply channel closed (caller dropped)");
                }
            }
            Command::Reset { source, reply } => {
                let result = self.handle_reset(source);
                if reply.send(result).is_err() {
                    warn!("Reset reply channel closed (caller dropped)");
                }
            }
            Command::MovePlayer {
                player,
                direction,
                reply,
            } => {
                let result = self.session.move_player(player, direction);
                if let Ok(report) = &result {
                    self.publish_report(report);
                }
                let result = result.map_err(RuntimeError::from);
                if reply.send(result).is_err() {
                    warn!("MovePlayer reply channel closed (caller dropped)");
                }
            }
            Command::TickMonsters { reply } => {
                let result = self.session.tick_monsters();
                if let Ok(reports) = &result {
                    for report in reports {
                        self.publish_report(report);
                    }
                }
                let result = result.map_err(RuntimeError::from);
                if reply.send(result).is_err() {
                    warn!("TickMonsters reply channel closed (caller dropped)");
                }
            }
            Command::TickMonster { monster, epoch } => self.handle_tick(monster, epoch),
            Command::QueryStatus { reply } => {
                let status = (self.session.status(), self.session.outcome());
                if reply.send(status).is_err() {
                    warn!("QueryStatus reply channel closed (caller dropped)");
                }
            }
            Command::QuerySnapshot { reply } => {
                let snapshot = GameSnapshot {
                    status: self.session.status(),
                    outcome: self.session.outcome(),
                    level: self.session.level().clone(),
                };
                if reply.send(snapshot).is_err() {
                    warn!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_start(&mut self) -> bool {
        if !self.session.start() {
            debug!("start ignored: already running or level decided");
            return false;
        }
        if let Some(scheduler) = &mut self.scheduler {
            scheduler.arm(self.session.level().monsters());
        }
        info!("game started");
        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Started));
        true
    }

    fn handle_stop(&mut self) -> bool {
        if !self.session.stop() {
            return false;
        }
        self.disarm();
        info!("game stopped");
        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Stopped));
        true
    }

    fn handle_reset(&mut self, source: Option<Arc<dyn LevelSource>>) -> Result<()> {
        match source {
            Some(source) => self.session.reset_with(source)?,
            None => self.session.reset()?,
        }
        self.disarm();

        let remaining_pellets = self.session.level().remaining_pellets();
        info!(remaining_pellets, "level reset");
        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Reset { remaining_pellets }));
        Ok(())
    }

    fn handle_tick(&mut self, monster: MonsterId, epoch: u64) {
        let current = self.scheduler.as_ref().map(MonsterScheduler::epoch);
        if current != Some(epoch) {
            trace!(%monster, epoch, "stale monster tick dropped");
            return;
        }

        match self.session.tick_monster(monster) {
            Ok(report) => self.publish_report(&report),
            Err(error) => warn!(%monster, "monster tick failed: {error}"),
        }
    }

    fn publish_report(&mut self, report: &MoveReport) {
        let MoveReport::Resolved { outcome, finished } = report else {
            return;
        };

        debug!(
            unit = %outcome.unit,
            direction = %outcome.direction,
            kind = ?outcome.kind,
            "move resolved"
        );
        self.event_bus.publish(Event::Movement(MovementEvent {
            outcome: outcome.clone(),
        }));

        if let Some(status) = *finished {
            self.disarm();
            let scores = self
                .session
                .players()
                .iter()
                .map(|player| (player.id(), player.score()))
                .collect();
            info!(?status, "game finished");
            self.event_bus
                .publish(Event::Lifecycle(LifecycleEvent::Finished { status, scores }));
        }
    }

    fn disarm(&mut self) {
        if let Some(scheduler) = &mut self.scheduler {
            scheduler.disarm();
        }
    }
}
