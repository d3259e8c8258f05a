//! Target-seeking policies built on board navigation.

use crate::board::Occupant;
use crate::level::Level;
use crate::types::{Direction, Position};
use crate::unit::Monster;

use super::{MovementPolicy, nearest_player};

/// Takes the shortest path towards the nearest live player.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pursuit;

impl MovementPolicy for Pursuit {
    fn next_direction(&mut self, level: &Level, monster: &Monster) -> Option<Direction> {
        let (_, target) = nearest_player(level, monster.position())?;
        level.board().direction_towards(monster.position(), target)
    }
}

/// Aims at the cell `lookahead` steps ahead of the nearest player.
#[derive(Clone, Copy, Debug)]
pub struct Ambush {
    lookahead: u32,
}

impl Ambush {
    pub fn new(lookahead: u32) -> Self {
        Self { lookahead }
    }

    fn target(&self, level: &Level, from: Position, facing: Direction) -> Position {
        let board = level.board();
        let mut target = from;
        for _ in 0..self.lookahead {
            let next = board.neighbour(target, facing);
            if !board.terrain(next).is_some_and(|terrain| terrain.is_passable()) {
                break;
            }
            target = next;
        }
        target
    }
}

impl MovementPolicy for Ambush {
    fn next_direction(&mut self, level: &Level, monster: &Monster) -> Option<Direction> {
        let (player, position) = nearest_player(level, monster.position())?;
        let ahead = self.target(level, position, player.direction());

        let board = level.board();
        board
            .direction_towards(monster.position(), ahead)
            .or_else(|| board.direction_towards(monster.position(), position))
    }
}

/// Chases from afar and backs off once within `radius` steps.
#[derive(Clone, Copy, Debug)]
pub struct Shy {
    radius: u32,
}

impl Shy {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }
}

impl MovementPolicy for Shy {
    fn next_direction(&mut self, level: &Level, monster: &Monster) -> Option<Direction> {
        let board = level.board();
        let from = monster.position();
        let (_, target) = nearest_player(level, from)?;
        let distance = board.distance(from, target)?;

        if distance > self.radius {
            return board.direction_towards(from, target);
        }

        let occupant = Occupant::Unit(monster.id().into());
        // Reversed so ties resolve to the earliest direction in `ALL`.
        Direction::ALL
            .into_iter()
            .rev()
            .filter_map(|direction| {
                let next = board.neighbour(from, direction);
                if !board.can_enter(next, occupant) {
                    return None;
                }
                Some((board.distance(next, target)?, direction))
            })
            .filter(|(next, _)| *next > distance)
            .max_by_key(|(next, _)| *next)
            .map(|(_, direction)| direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::level_from_rows;
    use crate::types::PlayerId;
    use crate::unit::Player;

    fn corridor(row: &str) -> Level {
        let mut level = level_from_rows(&["########", row, "########"]);
        level.register_player(Player::new(PlayerId(0))).unwrap();
        level
    }

    fn propose(policy: &mut impl MovementPolicy, level: &Level) -> Option<Direction> {
        policy.next_direction(level, &level.monsters()[0])
    }

    #[test]
    fn pursuit_heads_for_the_player() {
        let level = corridor("#P  G  #");
        assert_eq!(propose(&mut Pursuit, &level), Some(Direction::West));
    }

    #[test]
    fn pursuit_idles_without_live_players() {
        let level = level_from_rows(&["#####", "# G #", "#####"]);
        assert_eq!(propose(&mut Pursuit, &level), None);
    }

    #[test]
    fn ambush_cuts_ahead_of_the_player() {
        let level = corridor("#P  G  #");
        assert_eq!(propose(&mut Ambush::new(4), &level), Some(Direction::East));
    }

    #[test]
    fn ambush_closes_in_once_on_target() {
        let level = corridor("#P   G #");
        assert_eq!(propose(&mut Ambush::new(4), &level), Some(Direction::West));
    }

    #[test]
    fn shy_keeps_its_distance() {
        let far = corridor("#P  G  #");
        assert_eq!(propose(&mut Shy::new(2), &far), Some(Direction::West));

        let near = corridor("#P G   #");
        assert_eq!(propose(&mut Shy::new(2), &near), Some(Direction::East));
    }
}
