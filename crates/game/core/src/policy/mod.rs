//! Pluggable movement policies for autonomous monsters.
//!
//! A policy looks at the level and the monster it drives and proposes a
//! direction. It never mutates the level: the proposal goes through the same
//! [`crate::Level::move_unit`] path as player input. Policies may keep
//! internal state (an RNG, a script cursor), hence `&mut self`.
mod pursuit;
mod random;
mod rng;
mod scripted;

pub use pursuit::{Ambush, Pursuit, Shy};
pub use random::RandomWalk;
pub use rng::{Pcg32, mix_seed};
pub use scripted::Scripted;

use crate::level::Level;
use crate::types::{Direction, Position};
use crate::unit::{Monster, MonsterKind, Player};

pub trait MovementPolicy: Send {
    /// Direction for the next tick, or `None` to stay put.
    fn next_direction(&mut self, level: &Level, monster: &Monster) -> Option<Direction>;
}

impl MovementPolicy for Box<dyn MovementPolicy> {
    fn next_direction(&mut self, level: &Level, monster: &Monster) -> Option<Direction> {
        (**self).next_direction(level, monster)
    }
}

/// Hybrid policy: asks `primary` first and falls back to `secondary`.
#[derive(Clone, Debug)]
pub struct Fallback<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> Fallback<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A, B> MovementPolicy for Fallback<A, B>
where
    A: MovementPolicy,
    B: MovementPolicy,
{
    fn next_direction(&mut self, level: &Level, monster: &Monster) -> Option<Direction> {
        self.primary
            .next_direction(level, monster)
            .or_else(|| self.secondary.next_direction(level, monster))
    }
}

/// Builds one policy per monster whenever a level is (re)loaded.
pub trait PolicyFactory: Send + Sync {
    fn policy_for(&self, monster: &Monster) -> Box<dyn MovementPolicy>;
}

impl<F> PolicyFactory for F
where
    F: Fn(&Monster) -> Box<dyn MovementPolicy> + Send + Sync,
{
    fn policy_for(&self, monster: &Monster) -> Box<dyn MovementPolicy> {
        self(monster)
    }
}

/// The classic personalities, each backed by a seeded random walk.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicPolicies {
    seed: u64,
}

impl ClassicPolicies {
    pub const AMBUSH_LOOKAHEAD: u32 = 4;
    pub const SHY_RADIUS: u32 = 8;

    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PolicyFactory for ClassicPolicies {
    fn policy_for(&self, monster: &Monster) -> Box<dyn MovementPolicy> {
        let wander = RandomWalk::new(mix_seed(self.seed, u64::from(monster.id().0)));
        match monster.kind() {
            MonsterKind::Blinky => Box::new(Fallback::new(Pursuit, wander)),
            MonsterKind::Pinky => Box::new(Fallback::new(
                Ambush::new(Self::AMBUSH_LOOKAHEAD),
                wander,
            )),
            MonsterKind::Inky => Box::new(wander),
            MonsterKind::Clyde => Box::new(Fallback::new(Shy::new(Self::SHY_RADIUS), wander)),
        }
    }
}

/// Live player closest to `from` by walking distance.
pub(crate) fn nearest_player(level: &Level, from: Position) -> Option<(&Player, Position)> {
    level
        .players()
        .iter()
        .filter(|player| player.is_alive())
        .filter_map(|player| {
            let position = player.position()?;
            let distance = level.board().distance(from, position)?;
            Some((distance, player, position))
        })
        .min_by_key(|(distance, player, _)| (*distance, player.id()))
        .map(|(_, player, position)| (player, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::level_from_rows;
    use crate::types::PlayerId;

    struct Never;

    impl MovementPolicy for Never {
        fn next_direction(&mut self, _level: &Level, _monster: &Monster) -> Option<Direction> {
            None
        }
    }

    #[test]
    fn fallback_uses_secondary_when_primary_declines() {
        let level = level_from_rows(&["#####", "# G #", "#####"]);
        let monster = &level.monsters()[0];

        let mut policy = Fallback::new(Never, Scripted::new([Direction::West]));

        assert_eq!(policy.next_direction(&level, monster), Some(Direction::West));
        assert_eq!(policy.next_direction(&level, monster), None);
    }

    #[test]
    fn classic_policies_are_reproducible() {
        let level = level_from_rows(&["#######", "#G   G#", "#     #", "#######"]);
        let factory = ClassicPolicies::new(11);

        for monster in level.monsters() {
            let mut left = factory.policy_for(monster);
            let mut right = factory.policy_for(monster);
            for _ in 0..10 {
                assert_eq!(
                    left.next_direction(&level, monster),
                    right.next_direction(&level, monster)
                );
            }
        }
    }

    #[test]
    fn closures_build_policies() {
        let level = level_from_rows(&["#####", "# G #", "#####"]);
        let factory = |_: &Monster| -> Box<dyn MovementPolicy> {
            Box::new(Scripted::new([Direction::East]))
        };

        let mut policy = factory.policy_for(&level.monsters()[0]);

        assert_eq!(
            policy.next_direction(&level, &level.monsters()[0]),
            Some(Direction::East)
        );
    }

    #[test]
    fn nearest_player_ignores_the_dead() {
        let mut level = level_from_rows(&["#####", "#PG #", "#####"]);
        level.register_player(Player::new(PlayerId(0))).unwrap();
        let monster = level.monsters()[0].id();
        let from = level.monster(monster).unwrap().position();
        assert!(nearest_player(&level, from).is_some());

        level.move_unit(monster.into(), Direction::West).unwrap();
        let from = level.monster(monster).unwrap().position();

        assert!(nearest_player(&level, from).is_none());
    }
}
