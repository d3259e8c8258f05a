//! Factories that produce fresh levels for a game session.

use super::{Level, LevelError};

/// Produces a fully populated level, without players, on demand.
///
/// The game calls this once at construction and again on every reset.
pub trait LevelSource: Send + Sync {
    fn create_level(&self) -> Result<Level, LevelError>;
}

impl<F> LevelSource for F
where
    F: Fn() -> Result<Level, LevelError> + Send + Sync,
{
    fn create_level(&self) -> Result<Level, LevelError> {
        self()
    }
}

/// Replays a prepared level; registered players are stripped from each copy.
#[derive(Clone, Debug)]
pub struct LevelTemplate {
    level: Level,
}

impl LevelTemplate {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl LevelSource for LevelTemplate {
    fn create_level(&self) -> Result<Level, LevelError> {
        let mut level = self.level.clone();
        level.take_players();
        Ok(level)
    }
}
