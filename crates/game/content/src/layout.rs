//! Text layout parser.

use game_core::{
    Board, CollectibleKind, GameConfig, Level, LevelError, LevelSource, MonsterKind, Position,
    Terrain,
};

/// The built-in 21x21 board.
pub const CLASSIC_LAYOUT: &str = include_str!("../data/levels/classic.txt");

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at {position}")]
    UnknownTile { tile: char, position: Position },
}

/// A parsed layout, ready to produce levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    width: u32,
    height: u32,
    terrain: Vec<Terrain>,
    starts: Vec<Position>,
    monsters: Vec<(MonsterKind, Position)>,
    collectibles: Vec<(CollectibleKind, Position)>,
    config: GameConfig,
}

impl Layout {
    /// Parses a layout, scoring collectibles with `config`.
    ///
    /// Trailing blank lines are ignored; every other row must have the width
    /// of the first. Monsters take their kind from [`MonsterKind::ROTATION`]
    /// in reading order.
    pub fn parse(text: &str, config: GameConfig) -> Result<Self, LayoutError> {
        let mut rows: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        let Some(first) = rows.first() else {
            return Err(LayoutError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut layout = Self {
            width: width as u32,
            height: rows.len() as u32,
            terrain: Vec::with_capacity(width * rows.len()),
            starts: Vec::new(),
            monsters: Vec::new(),
            collectibles: Vec::new(),
            config,
        };

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, tile) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                layout.push_tile(tile, position)?;
            }
        }

        Ok(layout)
    }

    /// The built-in board with default scoring.
    pub fn classic() -> Result<Self, LayoutError> {
        Self::parse(CLASSIC_LAYOUT, GameConfig::default())
    }

    /// Same grid, different scoring.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_starts(&self) -> &[Position] {
        &self.starts
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    pub fn collectible_count(&self) -> usize {
        self.collectibles.len()
    }

    /// Builds a fresh level without players.
    pub fn to_level(&self) -> Result<Level, LevelError> {
        let board = Board::new(self.width, self.height, self.terrain.clone())?;
        let mut builder = Level::builder(board);

        for &start in &self.starts {
            builder = builder.player_start(start);
        }
        for &(kind, position) in &self.collectibles {
            builder = builder.collectible(kind, kind.value(&self.config), position);
        }
        for &(kind, position) in &self.monsters {
            builder = builder.monster(kind, position);
        }

        builder.build()
    }

    fn push_tile(&mut self, tile: char, position: Position) -> Result<(), LayoutError> {
        let terrain = match tile {
            '#' => Terrain::Wall,
            ' ' => Terrain::Floor,
            '.' => {
                self.collectibles.push((CollectibleKind::Pellet, position));
                Terrain::Floor
            }
            'F' => {
                self.collectibles.push((CollectibleKind::Bonus, position));
                Terrain::Floor
            }
            'P' => {
                self.starts.push(position);
                Terrain::Floor
            }
            'G' => {
                let rotation = &MonsterKind::ROTATION;
                let kind = rotation[self.monsters.len() % rotation.len()];
                self.monsters.push((kind, position));
                Terrain::Floor
            }
            other => {
                return Err(LayoutError::UnknownTile {
                    tile: other,
                    position,
                });
            }
        };
        self.terrain.push(terrain);
        Ok(())
    }
}

impl LevelSource for Layout {
    fn create_level(&self) -> Result<Level, LevelError> {
        self.to_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_board_matches_its_description() {
        let layout = Layout::classic().unwrap();

        assert_eq!((layout.width(), layout.height()), (21, 21));
        assert_eq!(layout.collectible_count(), 164);
        assert_eq!(layout.monster_count(), 4);
        assert_eq!(layout.player_starts(), &[Position::new(10, 15)]);

        let level = layout.to_level().unwrap();
        assert_eq!(level.remaining_pellets(), 164);
        assert_eq!(level.initial_pellets(), 164);
    }

    #[test]
    fn classic_monsters_follow_the_rotation() {
        let level = Layout::classic().unwrap().to_level().unwrap();
        let kinds: Vec<MonsterKind> = level.monsters().iter().map(|m| m.kind()).collect();

        assert_eq!(kinds, MonsterKind::ROTATION.to_vec());
    }

    #[test]
    fn every_classic_cell_is_reachable_from_the_start() {
        let layout = Layout::classic().unwrap();
        let level = layout.to_level().unwrap();
        let start = layout.player_starts()[0];

        let unreachable: Vec<Position> = level
            .board()
            .positions()
            .filter(|&position| level.board().is_accessible(position))
            .filter(|&position| level.board().distance(start, position).is_none())
            .collect();

        assert!(unreachable.is_empty(), "unreachable: {unreachable:?}");
    }

    #[test]
    fn scoring_follows_the_config() {
        let layout = Layout::parse("P.F\n", GameConfig::with_values(1, 2)).unwrap();
        let level = layout.to_level().unwrap();

        let values: Vec<u32> = level.collectibles().map(|c| c.value()).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn parse_errors_are_specific() {
        assert_eq!(
            Layout::parse("\n\n", GameConfig::default()),
            Err(LayoutError::Empty)
        );
        assert_eq!(
            Layout::parse("###\n##\n", GameConfig::default()),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Layout::parse("#.\n#x\n", GameConfig::default()),
            Err(LayoutError::UnknownTile {
                tile: 'x',
                position: Position::new(1, 1)
            })
        );
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let layout = Layout::parse("#P.#\r\n#..#\r\n", GameConfig::default()).unwrap();
        assert_eq!((layout.width(), layout.height()), (4, 2));
        assert_eq!(layout.collectible_count(), 3);
    }

    #[test]
    fn each_level_is_independent() {
        let layout = Layout::parse("P..", GameConfig::default()).unwrap();

        let first = layout.create_level().unwrap();
        let second = layout.create_level().unwrap();

        assert_eq!(first, second);
        assert!(first.players().is_empty());
    }
}
