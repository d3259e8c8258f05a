//! Game session state machine.
//!
//! A [`GameSession`] owns the current [`Level`] and a single in-progress
//! flag. Player moves and monster ticks are only forwarded to the level
//! while the game is in progress; anything else is answered with
//! [`MoveReport::Ignored`]. Once the variant reports an outcome the session
//! stops itself and refuses to start again until it is reset.
mod errors;
mod variant;

pub use errors::GameError;
pub use variant::{GameVariant, MultiPlayer, SinglePlayer};

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::level::{Level, LevelSource, LevelStatus, MoveOutcome};
use crate::policy::{ClassicPolicies, MovementPolicy, PolicyFactory};
use crate::types::{Direction, MonsterId, PlayerId, UnitId};
use crate::unit::Player;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Stopped,
    InProgress,
}

/// Result of a move request or monster tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveReport {
    /// The game was not in progress or the variant refused the move.
    Ignored,
    /// The monster's policy chose to stay put.
    Idle,
    Resolved {
        outcome: MoveOutcome,
        /// Set when this move decided the game; the session is stopped.
        finished: Option<LevelStatus>,
    },
}

impl MoveReport {
    pub fn finished(&self) -> Option<LevelStatus> {
        match self {
            MoveReport::Resolved { finished, .. } => *finished,
            _ => None,
        }
    }
}

pub struct GameSession {
    variant: Box<dyn GameVariant>,
    source: Arc<dyn LevelSource>,
    policies: Arc<dyn PolicyFactory>,
    level: Level,
    monster_policies: BTreeMap<MonsterId, Box<dyn MovementPolicy>>,
    status: GameStatus,
    outcome: Option<LevelStatus>,
}

impl GameSession {
    /// Builds a session and registers `roster` with a fresh level.
    pub fn new(
        variant: impl GameVariant + 'static,
        source: Arc<dyn LevelSource>,
        policies: Arc<dyn PolicyFactory>,
        roster: impl IntoIterator<Item = PlayerId>,
    ) -> Result<Self, GameError> {
        let roster: Vec<PlayerId> = roster.into_iter().collect();
        variant.validate_roster(&roster)?;

        let level = populate(
            source.as_ref(),
            roster.into_iter().map(Player::new).collect(),
        )?;
        let monster_policies = build_policies(policies.as_ref(), &level);

        Ok(Self {
            variant: Box::new(variant),
            source,
            policies,
            level,
            monster_policies,
            status: GameStatus::Stopped,
            outcome: None,
        })
    }

    /// Single-player session with the classic monster personalities.
    pub fn single_player(source: Arc<dyn LevelSource>) -> Result<Self, GameError> {
        Self::new(
            SinglePlayer,
            source,
            Arc::new(ClassicPolicies::default()),
            [PlayerId(0)],
        )
    }

    /// Returns `false` when already running or when the level is decided.
    pub fn start(&mut self) -> bool {
        if self.is_in_progress() || self.variant.outcome(&self.level).is_some() {
            return false;
        }
        self.status = GameStatus::InProgress;
        true
    }

    pub fn stop(&mut self) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        self.status = GameStatus::Stopped;
        true
    }

    pub fn move_player(
        &mut self,
        player: PlayerId,
        direction: Direction,
    ) -> Result<MoveReport, GameError> {
        if self.level.player(player).is_none() {
            return Err(GameError::UnknownPlayer(player));
        }
        if !self.is_in_progress() || !self.variant.accepts_move(&self.level, player) {
            return Ok(MoveReport::Ignored);
        }
        self.apply(UnitId::Player(player), direction)
    }

    /// Asks the monster's policy for a direction and performs that move.
    pub fn tick_monster(&mut self, monster: MonsterId) -> Result<MoveReport, GameError> {
        let Some(state) = self.level.monster(monster) else {
            return Err(GameError::UnknownMonster(monster));
        };
        if !self.is_in_progress() {
            return Ok(MoveReport::Ignored);
        }

        let direction = self
            .monster_policies
            .get_mut(&monster)
            .and_then(|policy| policy.next_direction(&self.level, state));

        match direction {
            Some(direction) => self.apply(UnitId::Monster(monster), direction),
            None => Ok(MoveReport::Idle),
        }
    }

    /// Ticks every monster once, in id order, until the game stops.
    pub fn tick_monsters(&mut self) -> Result<Vec<MoveReport>, GameError> {
        let ids: Vec<MonsterId> = self.monster_policies.keys().copied().collect();
        let mut reports = Vec::with_capacity(ids.len());
        for id in ids {
            if !self.is_in_progress() {
                break;
            }
            reports.push(self.tick_monster(id)?);
        }
        Ok(reports)
    }

    pub fn reset(&mut self) -> Result<(), GameError> {
        self.reset_with(Arc::clone(&self.source))
    }

    /// Replaces the level with a fresh one from `source`.
    ///
    /// Players keep their identity and are revived with a zero score,
    /// facing east. If the new level cannot be built the session is left
    /// exactly as it was.
    pub fn reset_with(&mut self, source: Arc<dyn LevelSource>) -> Result<(), GameError> {
        let players = self
            .level
            .players()
            .iter()
            .cloned()
            .map(|mut player| {
                player.set_alive(true);
                player.reset_score();
                player.set_direction(Direction::East);
                player.set_position(None);
                player
            })
            .collect();

        let level = populate(source.as_ref(), players)?;
        self.monster_policies = build_policies(self.policies.as_ref(), &level);
        self.level = level;
        self.source = source;
        self.status = GameStatus::Stopped;
        self.outcome = None;
        Ok(())
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn players(&self) -> &[Player] {
        self.level.players()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.level.player(id)
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// How the last game ended, cleared by a reset.
    pub fn outcome(&self) -> Option<LevelStatus> {
        self.outcome
    }

    pub fn variant(&self) -> &dyn GameVariant {
        self.variant.as_ref()
    }

    fn apply(&mut self, unit: UnitId, direction: Direction) -> Result<MoveReport, GameError> {
        let outcome = self.level.move_unit(unit, direction)?;
        let finished = self.variant.outcome(&self.level);
        if let Some(status) = finished {
            self.status = GameStatus::Stopped;
            self.outcome = Some(status);
        }
        Ok(MoveReport::Resolved { outcome, finished })
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("variant", &self.variant)
            .field("status", &self.status)
            .field("outcome", &self.outcome)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

fn populate(source: &dyn LevelSource, players: Vec<Player>) -> Result<Level, GameError> {
    let mut level = source.create_level()?;
    for player in players {
        level.register_player(player)?;
    }
    Ok(level)
}

fn build_policies(
    factory: &dyn PolicyFactory,
    level: &Level,
) -> BTreeMap<MonsterId, Box<dyn MovementPolicy>> {
    level
        .monsters()
        .iter()
        .map(|monster| (monster.id(), factory.policy_for(monster)))
        .collect()
}
