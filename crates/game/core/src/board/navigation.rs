//! Breadth-first distances over passable terrain, used by pursuit policies.

use std::collections::VecDeque;

use super::Board;
use crate::types::{Direction, Position};

const UNREACHABLE: u32 = u32::MAX;

impl Board {
    /// Shortest walking distance between two cells, ignoring occupants.
    pub fn distance(&self, from: Position, to: Position) -> Option<u32> {
        let field = self.distance_field(to)?;
        let index = self.index(from)?;
        match field[index] {
            UNREACHABLE => None,
            distance => Some(distance),
        }
    }

    /// First step of a shortest path from `from` to `to`.
    ///
    /// Returns `None` when already there or when `to` cannot be reached.
    /// Ties are broken in [`Direction::ALL`] order.
    pub fn direction_towards(&self, from: Position, to: Position) -> Option<Direction> {
        let field = self.distance_field(to)?;
        let current = field[self.index(from)?];
        if current == 0 || current == UNREACHABLE {
            return None;
        }

        Direction::ALL.into_iter().find(|&direction| {
            self.index(self.neighbour(from, direction))
                .is_some_and(|index| field[index] == current - 1)
        })
    }

    /// Reverse search from `target`; unreachable cells hold `u32::MAX`.
    fn distance_field(&self, target: Position) -> Option<Vec<u32>> {
        let target_index = self.index(target)?;
        let mut distances = vec![UNREACHABLE; self.cells.len()];

        if !self.cells[target_index].terrain.is_passable() {
            return Some(distances);
        }

        distances[target_index] = 0;
        let mut queue = VecDeque::from([target]);

        while let Some(cell) = queue.pop_front() {
            let Some(current_index) = self.index(cell) else {
                continue;
            };
            let next_distance = distances[current_index] + 1;

            for direction in Direction::ALL {
                let neighbour = self.neighbour(cell, direction);
                let Some(neighbour_index) = self.index(neighbour) else {
                    continue;
                };
                if !self.cells[neighbour_index].terrain.is_passable()
                    || distances[neighbour_index] <= next_distance
                {
                    continue;
                }

                distances[neighbour_index] = next_distance;
                queue.push_back(neighbour);
            }
        }

        Some(distances)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::board_from_rows;
    use crate::types::{Direction, Position};

    const WALLED: &[&str] = &["#####", "#.#.#", "#...#", "#####"];

    #[test]
    fn distance_walks_around_walls() {
        let board = board_from_rows(WALLED);

        assert_eq!(board.distance(Position::new(1, 1), Position::new(3, 1)), Some(4));
        assert_eq!(board.distance(Position::new(1, 2), Position::new(1, 2)), Some(0));
    }

    #[test]
    fn direction_towards_follows_shortest_path() {
        let board = board_from_rows(WALLED);

        assert_eq!(
            board.direction_towards(Position::new(1, 1), Position::new(3, 1)),
            Some(Direction::South)
        );
        assert_eq!(
            board.direction_towards(Position::new(1, 2), Position::new(3, 2)),
            Some(Direction::East)
        );
        assert_eq!(
            board.direction_towards(Position::new(3, 2), Position::new(3, 2)),
            None
        );
    }

    #[test]
    fn wrap_around_counts_as_adjacent() {
        let board = board_from_rows(&["......"]);

        assert_eq!(board.distance(Position::new(0, 0), Position::new(5, 0)), Some(1));
        assert_eq!(
            board.direction_towards(Position::new(0, 0), Position::new(5, 0)),
            Some(Direction::West)
        );
    }

    #[test]
    fn walls_are_unreachable() {
        let board = board_from_rows(WALLED);

        assert_eq!(board.distance(Position::new(1, 1), Position::new(2, 1)), None);
        assert_eq!(
            board.direction_towards(Position::new(1, 1), Position::new(2, 1)),
            None
        );
    }
}
