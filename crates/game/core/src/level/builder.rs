use std::collections::BTreeMap;

use crate::board::{Board, Occupant};
use crate::collectible::{Collectible, CollectibleKind};
use crate::types::{CollectibleId, MonsterId, Position, UnitId};
use crate::unit::{Monster, MonsterKind};

use super::{Level, LevelError};

/// Assembles a [`Level`] from a board and initial placements.
///
/// Collectibles are placed before monsters, so a monster spawning on a
/// pellet sits on top of the stack.
#[derive(Clone, Debug)]
pub struct LevelBuilder {
    board: Board,
    starts: Vec<Position>,
    monsters: Vec<(MonsterKind, Position)>,
    collectibles: Vec<(CollectibleKind, u32, Position)>,
}

impl LevelBuilder {
    pub(crate) fn new(board: Board) -> Self {
        Self {
            board,
            starts: Vec::new(),
            monsters: Vec::new(),
            collectibles: Vec::new(),
        }
    }

    pub fn player_start(mut self, position: Position) -> Self {
        self.starts.push(position);
        self
    }

    pub fn monster(mut self, kind: MonsterKind, position: Position) -> Self {
        self.monsters.push((kind, position));
        self
    }

    pub fn collectible(mut self, kind: CollectibleKind, value: u32, position: Position) -> Self {
        self.collectibles.push((kind, value, position));
        self
    }

    pub fn build(self) -> Result<Level, LevelError> {
        let mut board = self.board;

        for &position in &self.starts {
            if !board.terrain(position).is_some_and(|terrain| terrain.is_passable()) {
                return Err(LevelError::InvalidStart { position });
            }
        }

        let mut collectibles = BTreeMap::new();
        for (index, (kind, value, position)) in self.collectibles.into_iter().enumerate() {
            let id = CollectibleId(index as u32);
            board.place(position, Occupant::Collectible(id))?;
            collectibles.insert(id, Collectible::new(id, kind, value, position));
        }

        let mut monsters = Vec::with_capacity(self.monsters.len());
        for (index, (kind, position)) in self.monsters.into_iter().enumerate() {
            let id = MonsterId(index as u16);
            board.place(position, Occupant::Unit(UnitId::Monster(id)))?;
            monsters.push(Monster::new(id, kind, position));
        }

        let pellets = collectibles.len();
        Ok(Level {
            board,
            starts: self.starts,
            players: Vec::new(),
            monsters,
            collectibles,
            initial_pellets: pellets,
            remaining_pellets: pellets,
        })
    }
}
