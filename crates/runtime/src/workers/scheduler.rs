//! Timer tasks that drive monsters while a game is in progress.
//!
//! Each monster gets its own task that sleeps for its kind's interval plus
//! jitter and then asks the simulation worker to tick it. Tasks only hold a
//! weak sender, so they never keep the worker alive, and every tick carries
//! the epoch it was armed under. Re-arming or disarming bumps the epoch, so
//! ticks still queued from an earlier run are recognisably stale.

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use game_core::{Monster, MonsterId};

use super::Command;
use crate::runtime::TempoConfig;

pub struct MonsterScheduler {
    tempo: TempoConfig,
    command_tx: mpsc::WeakSender<Command>,
    tasks: Vec<JoinHandle<()>>,
    epoch: u64,
}

impl MonsterScheduler {
    pub fn new(tempo: TempoConfig, command_tx: mpsc::WeakSender<Command>) -> Self {
        Self {
            tempo,
            command_tx,
            tasks: Vec::new(),
            epoch: 0,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_armed(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Replaces any running tasks with one task per monster.
    pub fn arm(&mut self, monsters: &[Monster]) {
        self.disarm();

        for monster in monsters {
            let interval = self.tempo.interval_for(monster.kind());
            self.tasks.push(tokio::spawn(drive(
                self.command_tx.clone(),
                monster.id(),
                self.epoch,
                interval,
                self.tempo.jitter,
            )));
        }
        debug!(epoch = self.epoch, monsters = monsters.len(), "monster scheduler armed");
    }

    /// Aborts every task and invalidates ticks already queued.
    pub fn disarm(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
        self.epoch += 1;
    }
}

impl Drop for MonsterScheduler {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

async fn drive(
    command_tx: mpsc::WeakSender<Command>,
    monster: MonsterId,
    epoch: u64,
    interval: Duration,
    jitter: Duration,
) {
    loop {
        tokio::time::sleep(interval.saturating_add(random_delay(jitter))).await;

        let Some(command_tx) = command_tx.upgrade() else {
            trace!(%monster, "worker gone, monster task exiting");
            break;
        };
        if command_tx
            .send(Command::TickMonster { monster, epoch })
            .await
            .is_err()
        {
            break;
        }
    }
}

fn random_delay(max: Duration) -> Duration {
    let max = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
    if max == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::thread_rng().gen_range(0..=max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_jitter_adds_no_delay() {
        assert_eq!(random_delay(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let max = Duration::from_millis(50);
        assert!((0..100).all(|_| random_delay(max) <= max));
    }

    #[test]
    fn oversized_jitter_is_clamped() {
        let max = Duration::from_secs(u64::MAX);
        assert!((0..10).all(|_| random_delay(max) <= max));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_carry_the_armed_epoch() {
        let (command_tx, mut command_rx) = mpsc::channel(8);
        let mut scheduler = MonsterScheduler::new(
            TempoConfig::uniform(Duration::from_millis(10)),
            command_tx.downgrade(),
        );
        scheduler.arm(&[]);
        assert!(!scheduler.is_armed());

        tokio::spawn(drive(
            command_tx.downgrade(),
            MonsterId(3),
            scheduler.epoch(),
            Duration::from_millis(10),
            Duration::ZERO,
        ));

        let Some(Command::TickMonster { monster, epoch }) = command_rx.recv().await else {
            panic!("expected a monster tick");
        };
        assert_eq!(monster, MonsterId(3));
        assert_eq!(epoch, scheduler.epoch());
    }

    #[tokio::test(start_paused = true)]
    async fn tasks_stop_once_the_worker_channel_is_gone() {
        let (command_tx, command_rx) = mpsc::channel::<Command>(8);
        let weak = command_tx.downgrade();
        drop(command_tx);
        drop(command_rx);

        let task = tokio::spawn(drive(
            weak,
            MonsterId(0),
            0,
            Duration::from_millis(10),
            Duration::ZERO,
        ));

        task.await.unwrap();
    }
}
