//! Game variants: how many players a game admits and when it is over.

use std::fmt;

use crate::config::GameConfig;
use crate::level::{Level, LevelStatus};
use crate::types::PlayerId;
use crate::unit::Player;

use super::GameError;

pub trait GameVariant: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    /// Rejects rosters this variant cannot be played with.
    fn validate_roster(&self, roster: &[PlayerId]) -> Result<(), GameError>;

    /// Whether a move request from `player` reaches the level at all.
    fn accepts_move(&self, level: &Level, player: PlayerId) -> bool {
        level.player(player).is_some_and(Player::is_alive)
    }

    /// Final status once the game is decided, `None` while it goes on.
    fn outcome(&self, level: &Level) -> Option<LevelStatus>;
}

/// Exactly one player; the game is lost as soon as that player dies.
#[derive(Clone, Copy, Debug, Default)]
pub struct SinglePlayer;

impl GameVariant for SinglePlayer {
    fn name(&self) -> &'static str {
        "single-player"
    }

    fn validate_roster(&self, roster: &[PlayerId]) -> Result<(), GameError> {
        if roster.len() != 1 {
            return Err(GameError::InvalidRoster {
                variant: self.name(),
                players: roster.len(),
            });
        }
        Ok(())
    }

    fn outcome(&self, level: &Level) -> Option<LevelStatus> {
        if level.players().first().is_some_and(|player| !player.is_alive()) {
            return Some(LevelStatus::Lost);
        }
        if level.remaining_pellets() == 0 {
            return Some(LevelStatus::Won);
        }
        None
    }
}

/// Up to `max_players` players; lost only once every player is dead.
#[derive(Clone, Copy, Debug)]
pub struct MultiPlayer {
    max_players: usize,
}

impl MultiPlayer {
    pub fn new(max_players: usize) -> Self {
        Self {
            max_players: max_players.min(GameConfig::MAX_PLAYERS),
        }
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }
}

impl Default for MultiPlayer {
    fn default() -> Self {
        Self::new(GameConfig::MAX_PLAYERS)
    }
}

impl GameVariant for MultiPlayer {
    fn name(&self) -> &'static str {
        "multi-player"
    }

    fn validate_roster(&self, roster: &[PlayerId]) -> Result<(), GameError> {
        if roster.is_empty() || roster.len() > self.max_players {
            return Err(GameError::InvalidRoster {
                variant: self.name(),
                players: roster.len(),
            });
        }
        Ok(())
    }

    fn outcome(&self, level: &Level) -> Option<LevelStatus> {
        let status = level.status();
        status.is_finished().then_some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_player_needs_exactly_one() {
        assert!(SinglePlayer.validate_roster(&[PlayerId(0)]).is_ok());
        assert_eq!(
            SinglePlayer.validate_roster(&[]),
            Err(GameError::InvalidRoster {
                variant: "single-player",
                players: 0
            })
        );
        assert!(
            SinglePlayer
                .validate_roster(&[PlayerId(0), PlayerId(1)])
                .is_err()
        );
    }

    #[test]
    fn multi_player_is_capped() {
        let variant = MultiPlayer::new(2);
        assert!(variant.validate_roster(&[PlayerId(0), PlayerId(1)]).is_ok());
        assert!(
            variant
                .validate_roster(&[PlayerId(0), PlayerId(1), PlayerId(2)])
                .is_err()
        );
        assert_eq!(MultiPlayer::new(99).max_players(), GameConfig::MAX_PLAYERS);
    }
}
