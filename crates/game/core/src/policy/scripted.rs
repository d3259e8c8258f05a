use crate::level::Level;
use crate::types::Direction;
use crate::unit::Monster;

use super::MovementPolicy;

/// Replays a fixed list of directions, once or on a loop.
#[derive(Clone, Debug)]
pub struct Scripted {
    steps: Vec<Direction>,
    cursor: usize,
    looping: bool,
}

impl Scripted {
    pub fn new(steps: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            cursor: 0,
            looping: false,
        }
    }

    pub fn looping(steps: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            looping: true,
            ..Self::new(steps)
        }
    }
}

impl MovementPolicy for Scripted {
    fn next_direction(&mut self, _level: &Level, _monster: &Monster) -> Option<Direction> {
        if self.cursor >= self.steps.len() {
            if !self.looping || self.steps.is_empty() {
                return None;
            }
            self.cursor = 0;
        }

        let step = self.steps[self.cursor];
        self.cursor += 1;
        Some(step)
    }
}
