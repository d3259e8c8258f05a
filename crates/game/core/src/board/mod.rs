//! Fixed-size grid of cells, each holding an ordered stack of occupants.
//!
//! The board never decides game rules. It answers whether a cell can be
//! entered and keeps occupancy in sync with the units and collectibles the
//! level moves around. The top of a stack is the most recently placed
//! occupant, which is also what a renderer should draw.
mod navigation;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::types::{CollectibleId, Direction, Position, UnitId};

pub type OccupantSlots = ArrayVec<Occupant, { GameConfig::MAX_OCCUPANTS_PER_TILE }>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    #[error("board dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("expected {expected} terrain cells, found {found}")]
    TerrainMismatch { expected: usize, found: usize },

    #[error("position {position} is outside the board")]
    OutOfBounds { position: Position },

    #[error("position {position} is not passable")]
    Impassable { position: Position },

    #[error("cell at {position} is full")]
    CellFull { position: Position },

    #[error("cell at {position} already holds a player")]
    PlayerCollision { position: Position },

    #[error("{occupant:?} is not present at {position}")]
    MissingOccupant {
        occupant: Occupant,
        position: Position,
    },
}

/// Static terrain of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Floor,
    Wall,
}

impl Terrain {
    pub fn is_passable(self) -> bool {
        matches!(self, Terrain::Floor)
    }
}

/// Anything that can sit on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Unit(UnitId),
    Collectible(CollectibleId),
}

impl Occupant {
    pub fn is_player(self) -> bool {
        matches!(self, Occupant::Unit(UnitId::Player(_)))
    }
}

impl From<UnitId> for Occupant {
    fn from(id: UnitId) -> Self {
        Occupant::Unit(id)
    }
}

impl From<CollectibleId> for Occupant {
    fn from(id: CollectibleId) -> Self {
        Occupant::Collectible(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Cell {
    terrain: Terrain,
    occupants: OccupantSlots,
}

impl Cell {
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Most recently placed occupant.
    pub fn top(&self) -> Option<Occupant> {
        self.occupants.last().copied()
    }

    pub fn is_full(&self) -> bool {
        self.occupants.is_full()
    }

    fn holds_player(&self) -> bool {
        self.occupants.iter().any(|occupant| occupant.is_player())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds a board from row-major terrain.
    pub fn new(width: u32, height: u32, terrain: Vec<Terrain>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || i32::try_from(width.max(height)).is_err() {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let expected = width as usize * height as usize;
        if terrain.len() != expected {
            return Err(BoardError::TerrainMismatch {
                expected,
                found: terrain.len(),
            });
        }

        let cells = terrain
            .into_iter()
            .map(|terrain| Cell {
                terrain,
                occupants: OccupantSlots::new(),
            })
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a board where every cell has the same terrain.
    pub fn filled(width: u32, height: u32, terrain: Terrain) -> Result<Self, BoardError> {
        let count = width as usize * height as usize;
        Self::new(width, height, vec![terrain; count])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|index| &self.cells[index])
    }

    pub fn terrain(&self, position: Position) -> Option<Terrain> {
        self.cell(position).map(Cell::terrain)
    }

    /// Occupants of a cell, bottom first. Empty for positions off the board.
    pub fn occupants(&self, position: Position) -> &[Occupant] {
        self.cell(position).map(Cell::occupants).unwrap_or(&[])
    }

    /// Whether a cell can take another occupant at all.
    pub fn is_accessible(&self, position: Position) -> bool {
        self.cell(position)
            .is_some_and(|cell| cell.terrain.is_passable() && !cell.is_full())
    }

    /// Whether `occupant` specifically may enter the cell.
    ///
    /// Two players never share a cell; every other combination is resolved
    /// by the level as a collision.
    pub fn can_enter(&self, position: Position, occupant: Occupant) -> bool {
        self.is_accessible(position)
            && !(occupant.is_player()
                && self
                    .occupants(position)
                    .iter()
                    .any(|other| other.is_player() && *other != occupant))
    }

    /// Adjacent position in `direction`, wrapping around the board edges.
    pub fn neighbour(&self, position: Position, direction: Direction) -> Position {
        let next = position.step(direction);
        Position::new(
            next.x.rem_euclid(self.width as i32),
            next.y.rem_euclid(self.height as i32),
        )
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Pushes an occupant on top of a cell's stack.
    pub fn place(&mut self, position: Position, occupant: Occupant) -> Result<(), BoardError> {
        let index = self
            .index(position)
            .ok_or(BoardError::OutOfBounds { position })?;
        let cell = &mut self.cells[index];

        if cell.occupants.contains(&occupant) {
            return Ok(());
        }
        if !cell.terrain.is_passable() {
            return Err(BoardError::Impassable { position });
        }
        if occupant.is_player() && cell.holds_player() {
            return Err(BoardError::PlayerCollision { position });
        }

        cell.occupants
            .try_push(occupant)
            .map_err(|_| BoardError::CellFull { position })
    }

    /// Removes an occupant, keeping the order of the rest of the stack.
    pub fn remove(&mut self, position: Position, occupant: Occupant) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        let occupants = &mut self.cells[index].occupants;

        match occupants.iter().position(|candidate| *candidate == occupant) {
            Some(slot) => {
                occupants.remove(slot);
                true
            }
            None => false,
        }
    }

    /// Moves an occupant between cells; the board is unchanged on failure.
    pub fn relocate(
        &mut self,
        from: Position,
        to: Position,
        occupant: Occupant,
    ) -> Result<(), BoardError> {
        if !self.remove(from, occupant) {
            return Err(BoardError::MissingOccupant {
                occupant,
                position: from,
            });
        }

        if let Err(error) = self.place(to, occupant) {
            // Rollback: `from` just released this exact slot.
            let _ = self.place(from, occupant);
            return Err(error);
        }

        Ok(())
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.width as usize + position.x as usize)
    }
}
