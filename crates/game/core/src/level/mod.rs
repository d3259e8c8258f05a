//! A playable level: board, registered units and collectibles.
//!
//! [`Level::move_unit`] is the single movement path for players and
//! monsters alike. It relocates the unit, resolves collisions with whatever
//! already occupies the destination and reports the resulting
//! [`LevelStatus`]. Win and loss are returned as data, never raised as
//! errors.
mod builder;
mod collision;
mod errors;
mod source;

pub use builder::LevelBuilder;
pub use collision::Collision;
pub use errors::LevelError;
pub use source::{LevelSource, LevelTemplate};

use std::collections::BTreeMap;

use crate::board::{Board, BoardError, Occupant};
use crate::collectible::Collectible;
use crate::config::GameConfig;
use crate::types::{CollectibleId, Direction, MonsterId, PlayerId, Position, UnitId};
use crate::unit::{Monster, Player};

/// Terminal state of a level as seen by its players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelStatus {
    InPlay,
    /// Every collectible has been consumed.
    Won,
    /// No registered player is alive.
    Lost,
}

impl LevelStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, LevelStatus::InPlay)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Moved { from: Position, to: Position },
    /// Destination could not be entered; only the facing changed.
    Blocked { at: Position },
    /// Dead or unplaced unit; nothing changed.
    Inactive,
}

/// Everything that happened during one call to [`Level::move_unit`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub unit: UnitId,
    pub direction: Direction,
    pub kind: MoveKind,
    pub collisions: Vec<Collision>,
    pub status: LevelStatus,
}

impl MoveOutcome {
    pub fn points(&self) -> u32 {
        self.collisions
            .iter()
            .map(|collision| match collision {
                Collision::Consumed { value, .. } => *value,
                Collision::PlayerKilled { .. } => 0,
            })
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    board: Board,
    starts: Vec<Position>,
    players: Vec<Player>,
    monsters: Vec<Monster>,
    collectibles: BTreeMap<CollectibleId, Collectible>,
    initial_pellets: usize,
    remaining_pellets: usize,
}

impl Level {
    pub fn builder(board: Board) -> LevelBuilder {
        LevelBuilder::new(board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_starts(&self) -> &[Position] {
        &self.starts
    }

    /// Registered players in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.id() == id)
    }

    pub fn collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.collectibles.values()
    }

    pub fn collectible(&self, id: CollectibleId) -> Option<&Collectible> {
        self.collectibles.get(&id)
    }

    /// Collectibles the level was loaded with.
    pub fn initial_pellets(&self) -> usize {
        self.initial_pellets
    }

    /// Collectibles still on the board; the level is won at zero.
    pub fn remaining_pellets(&self) -> usize {
        self.remaining_pellets
    }

    pub fn is_any_player_alive(&self) -> bool {
        self.players.iter().any(Player::is_alive)
    }

    pub fn status(&self) -> LevelStatus {
        if !self.players.is_empty() && !self.is_any_player_alive() {
            LevelStatus::Lost
        } else if self.remaining_pellets == 0 {
            LevelStatus::Won
        } else {
            LevelStatus::InPlay
        }
    }

    /// Places a player on the next start cell, round-robin over the starts.
    pub fn register_player(&mut self, mut player: Player) -> Result<(), LevelError> {
        let id = player.id();
        if self.player(id).is_some() {
            return Err(LevelError::DuplicatePlayer(id));
        }
        if self.players.len() >= GameConfig::MAX_PLAYERS {
            return Err(LevelError::TooManyPlayers {
                limit: GameConfig::MAX_PLAYERS,
            });
        }
        if self.starts.is_empty() {
            return Err(LevelError::NoStartPositions);
        }

        let start = self.starts[self.players.len() % self.starts.len()];
        self.board
            .place(start, Occupant::Unit(UnitId::Player(id)))
            .map_err(|error| match error {
                BoardError::PlayerCollision { position } => LevelError::StartOccupied {
                    player: id,
                    position,
                },
                other => LevelError::Board(other),
            })?;

        player.set_position(Some(start));
        self.players.push(player);
        Ok(())
    }

    /// Unregisters every player, handing them back in registration order.
    pub fn take_players(&mut self) -> Vec<Player> {
        let mut players = std::mem::take(&mut self.players);
        for player in &mut players {
            if let Some(position) = player.position() {
                self.board
                    .remove(position, Occupant::Unit(UnitId::Player(player.id())));
            }
            player.set_position(None);
        }
        players
    }

    /// Moves a unit one cell and resolves the resulting collisions.
    ///
    /// Fails only for a unit this level does not know about.
    pub fn move_unit(
        &mut self,
        unit: UnitId,
        direction: Direction,
    ) -> Result<MoveOutcome, LevelError> {
        let Some(origin) = self.active_position(unit)? else {
            return Ok(self.outcome(unit, direction, MoveKind::Inactive, Vec::new()));
        };

        self.set_facing(unit, direction);

        let destination = self.board.neighbour(origin, direction);
        let occupant = Occupant::Unit(unit);
        if !self.board.can_enter(destination, occupant) {
            return Ok(self.outcome(
                unit,
                direction,
                MoveKind::Blocked { at: origin },
                Vec::new(),
            ));
        }

        self.board.relocate(origin, destination, occupant)?;
        self.set_position(unit, destination);

        let collisions = collision::resolve(self, unit, destination);
        Ok(self.outcome(
            unit,
            direction,
            MoveKind::Moved {
                from: origin,
                to: destination,
            },
            collisions,
        ))
    }

    /// Position of a unit able to move, `None` for a dead or unplaced player.
    fn active_position(&self, unit: UnitId) -> Result<Option<Position>, LevelError> {
        match unit {
            UnitId::Player(id) => {
                let player = self.player(id).ok_or(LevelError::UnknownUnit(unit))?;
                Ok(player.position().filter(|_| player.is_alive()))
            }
            UnitId::Monster(id) => self
                .monster(id)
                .map(|monster| Some(monster.position()))
                .ok_or(LevelError::UnknownUnit(unit)),
        }
    }

    fn set_facing(&mut self, unit: UnitId, direction: Direction) {
        match unit {
            UnitId::Player(id) => {
                if let Some(player) = self.player_mut(id) {
                    player.set_direction(direction);
                }
            }
            UnitId::Monster(id) => {
                if let Some(monster) = self.monster_mut(id) {
                    monster.set_direction(direction);
                }
            }
        }
    }

    fn set_position(&mut self, unit: UnitId, position: Position) {
        match unit {
            UnitId::Player(id) => {
                if let Some(player) = self.player_mut(id) {
                    player.set_position(Some(position));
                }
            }
            UnitId::Monster(id) => {
                if let Some(monster) = self.monster_mut(id) {
                    monster.set_position(position);
                }
            }
        }
    }

    fn outcome(
        &self,
        unit: UnitId,
        direction: Direction,
        kind: MoveKind,
        collisions: Vec<Collision>,
    ) -> MoveOutcome {
        MoveOutcome {
            unit,
            direction,
            kind,
            collisions,
            status: self.status(),
        }
    }

    /// Removes a collectible and credits it to `player`, at most once.
    fn consume(&mut self, player: PlayerId, id: CollectibleId) -> Option<Collision> {
        let collectible = self.collectibles.remove(&id)?;
        self.board
            .remove(collectible.position(), Occupant::Collectible(id));
        self.remaining_pellets = self.remaining_pellets.saturating_sub(1);

        if let Some(player) = self.player_mut(player) {
            player.add_points(collectible.value());
        }

        Some(Collision::Consumed {
            player,
            collectible: id,
            kind: collectible.kind(),
            value: collectible.value(),
        })
    }

    fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id() == id)
    }

    fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|monster| monster.id() == id)
    }
}
