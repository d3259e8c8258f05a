//! Movable entities: the controllable player and autonomous monsters.

use crate::types::{Direction, MonsterId, PlayerId, Position};

/// Player state carried across levels for the whole session.
///
/// A player is owned by the level it is registered with; on reset the game
/// moves the same value into the fresh level, so identity, and nothing else,
/// survives.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    score: u32,
    alive: bool,
    direction: Direction,
    position: Option<Position>,
    killer: Option<MonsterId>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            alive: true,
            direction: Direction::default(),
            position: None,
            killer: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell the player stands on, `None` while not registered with a level.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Monster responsible for the player's death, if any.
    pub fn killer(&self) -> Option<MonsterId> {
        self.killer
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
        if alive {
            self.killer = None;
        }
    }

    pub(crate) fn kill(&mut self, killer: MonsterId) {
        self.alive = false;
        self.killer = Some(killer);
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }
}

/// Classic monster personalities; each maps to a default movement policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterKind {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl MonsterKind {
    /// Assignment order for anonymous monsters in a layout.
    pub const ROTATION: [MonsterKind; 4] = [
        MonsterKind::Blinky,
        MonsterKind::Inky,
        MonsterKind::Pinky,
        MonsterKind::Clyde,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    id: MonsterId,
    kind: MonsterKind,
    position: Position,
    direction: Direction,
}

impl Monster {
    pub(crate) fn new(id: MonsterId, kind: MonsterKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            direction: Direction::default(),
        }
    }

    pub fn id(&self) -> MonsterId {
        self.id
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
