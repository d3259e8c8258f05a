use crate::board::Occupant;
use crate::level::Level;
use crate::types::Direction;
use crate::unit::Monster;

use super::{MovementPolicy, Pcg32};

/// Picks uniformly among the neighbouring cells the monster can enter.
#[derive(Clone, Debug)]
pub struct RandomWalk {
    rng: Pcg32,
}

impl RandomWalk {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::new(seed),
        }
    }
}

impl MovementPolicy for RandomWalk {
    fn next_direction(&mut self, level: &Level, monster: &Monster) -> Option<Direction> {
        let board = level.board();
        let occupant = Occupant::Unit(monster.id().into());
        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&direction| {
                board.can_enter(board.neighbour(monster.position(), direction), occupant)
            })
            .collect();

        if open.is_empty() {
            return None;
        }
        let pick = self.rng.below(open.len() as u32) as usize;
        Some(open[pick])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::level_from_rows;

    #[test]
    fn only_open_directions_are_chosen() {
        let level = level_from_rows(&["###", "#G ", "###"]);
        let mut policy = RandomWalk::new(3);

        for _ in 0..20 {
            assert_eq!(
                policy.next_direction(&level, &level.monsters()[0]),
                Some(Direction::East)
            );
        }
    }

    #[test]
    fn boxed_in_monster_stays_put() {
        let level = level_from_rows(&["###", "#G#", "###"]);
        let mut policy = RandomWalk::new(3);

        assert_eq!(policy.next_direction(&level, &level.monsters()[0]), None);
    }

    #[test]
    fn eventually_tries_every_exit() {
        let level = level_from_rows(&["#####", "#   #", "# G #", "#   #", "#####"]);
        let mut policy = RandomWalk::new(5);

        let mut seen: Vec<Direction> = (0..200)
            .filter_map(|_| policy.next_direction(&level, &level.monsters()[0]))
            .collect();
        seen.sort_by_key(|direction| direction.delta());
        seen.dedup();

        assert_eq!(seen.len(), 4);
    }
}
