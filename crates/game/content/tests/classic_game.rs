//! Plays the built-in board through a game session.

use std::sync::Arc;

use game_content::Layout;
use game_core::{Direction, GameSession, LevelSource, MoveReport, PlayerId};

const PLAYER: PlayerId = PlayerId(0);

fn classic_game() -> GameSession {
    let source: Arc<dyn LevelSource> = Arc::new(Layout::classic().unwrap());
    GameSession::single_player(source).unwrap()
}

fn score(game: &GameSession) -> u32 {
    game.player(PLAYER).unwrap().score()
}

fn step(game: &mut GameSession, direction: Direction) {
    let report = game.move_player(PLAYER, direction).unwrap();
    assert!(matches!(report, MoveReport::Resolved { .. }));
}

#[test]
fn pellet_then_bonus_then_nothing() {
    let mut game = classic_game();
    assert!(game.start());

    step(&mut game, Direction::East);
    assert_eq!(score(&game), 10);

    step(&mut game, Direction::West);
    assert_eq!(score(&game), 10);

    step(&mut game, Direction::West);
    assert_eq!(score(&game), 1010);

    step(&mut game, Direction::East);
    step(&mut game, Direction::East);
    assert_eq!(score(&game), 1010);
    assert_eq!(game.level().remaining_pellets(), 162);
    assert!(game.is_in_progress());
}

#[test]
fn reset_restores_the_full_board() {
    let mut game = classic_game();
    game.start();
    step(&mut game, Direction::East);
    step(&mut game, Direction::West);
    step(&mut game, Direction::West);

    game.reset().unwrap();

    let player = game.player(PLAYER).unwrap();
    assert!(!game.is_in_progress());
    assert_eq!(player.score(), 0);
    assert!(player.is_alive());
    assert_eq!(player.direction(), Direction::East);
    assert_eq!(game.level().remaining_pellets(), 164);
}

#[test]
fn moves_before_start_are_ignored() {
    let mut game = classic_game();

    let report = game.move_player(PLAYER, Direction::East).unwrap();

    assert_eq!(report, MoveReport::Ignored);
    assert_eq!(score(&game), 0);
}
