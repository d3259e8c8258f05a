mod common;

use common::{PLAYER, layout, runtime, scripted_session};
use game_core::{Direction, GameStatus, LevelStatus, MoveReport, PlayerId};
use runtime::{Event, LifecycleEvent, Runtime, RuntimeError, Topic};

const CORRIDOR: &str = "######\n#P..G#\n######\n";

#[tokio::test]
async fn moves_while_stopped_are_ignored() {
    let runtime = runtime(scripted_session(CORRIDOR, &[]), false).await;
    let handle = runtime.handle();
    let before = handle.players().await.unwrap();

    let report = handle.move_player(PLAYER, Direction::East).await.unwrap();

    assert_eq!(report, MoveReport::Ignored);
    assert_eq!(handle.players().await.unwrap(), before);
}

#[tokio::test]
async fn start_and_stop_are_idempotent() {
    let runtime = runtime(scripted_session(CORRIDOR, &[]), false).await;
    let handle = runtime.handle();

    assert!(handle.start().await.unwrap());
    assert!(!handle.start().await.unwrap());
    assert!(handle.is_in_progress().await.unwrap());

    assert!(handle.stop().await.unwrap());
    assert!(!handle.stop().await.unwrap());
    assert_eq!(handle.status().await.unwrap(), GameStatus::Stopped);
}

#[tokio::test]
async fn lifecycle_events_are_published_in_order() {
    let runtime = runtime(scripted_session(CORRIDOR, &[]), false).await;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Lifecycle);

    handle.start().await.unwrap();
    handle.stop().await.unwrap();
    handle.reset().await.unwrap();

    assert_eq!(
        events.recv().await.unwrap(),
        Event::Lifecycle(LifecycleEvent::Started)
    );
    assert_eq!(
        events.recv().await.unwrap(),
        Event::Lifecycle(LifecycleEvent::Stopped)
    );
    assert_eq!(
        events.recv().await.unwrap(),
        Event::Lifecycle(LifecycleEvent::Reset {
            remaining_pellets: 2
        })
    );
}

#[tokio::test]
async fn walking_into_a_monster_finishes_the_game() {
    let rows = "#######\n#P.G..#\n#######\n";
    let runtime = runtime(scripted_session(rows, &[]), false).await;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Lifecycle);
    handle.start().await.unwrap();

    handle.move_player(PLAYER, Direction::East).await.unwrap();
    let report = handle.move_player(PLAYER, Direction::East).await.unwrap();

    assert_eq!(report.finished(), Some(LevelStatus::Lost));
    assert_eq!(handle.level().await.unwrap().remaining_pellets(), 2);

    assert!(!handle.is_in_progress().await.unwrap());
    assert_eq!(handle.outcome().await.unwrap(), Some(LevelStatus::Lost));
    assert_eq!(
        events.recv().await.unwrap(),
        Event::Lifecycle(LifecycleEvent::Started)
    );
    assert_eq!(
        events.recv().await.unwrap(),
        Event::Lifecycle(LifecycleEvent::Finished {
            status: LevelStatus::Lost,
            scores: vec![(PLAYER, 10)],
        })
    );
}

#[tokio::test]
async fn clearing_the_board_wins() {
    let runtime = runtime(scripted_session("#####\n#P. #\n#G###\n", &[]), false).await;
    let handle = runtime.handle();
    handle.start().await.unwrap();

    let report = handle.move_player(PLAYER, Direction::East).await.unwrap();

    assert_eq!(report.finished(), Some(LevelStatus::Won));
    let snapshot = handle.snapshot().await.unwrap();
    assert!(!snapshot.is_in_progress());
    assert!(snapshot.players()[0].is_alive());
    assert_eq!(snapshot.level.remaining_pellets(), 0);
    assert!(!handle.start().await.unwrap());
}

#[tokio::test]
async fn reset_restores_players_and_pellets() {
    let runtime = runtime(scripted_session(CORRIDOR, &[]), false).await;
    let handle = runtime.handle();
    handle.start().await.unwrap();
    handle.move_player(PLAYER, Direction::East).await.unwrap();
    handle.move_player(PLAYER, Direction::North).await.unwrap();

    handle.reset().await.unwrap();

    let players = handle.players().await.unwrap();
    assert!(!handle.is_in_progress().await.unwrap());
    assert_eq!(players[0].score(), 0);
    assert_eq!(players[0].direction(), Direction::East);
    assert!(players[0].is_alive());
    assert_eq!(handle.level().await.unwrap().remaining_pellets(), 2);
}

#[tokio::test]
async fn reset_with_switches_levels_and_errors_surface() {
    let runtime = runtime(scripted_session(CORRIDOR, &[]), false).await;
    let handle = runtime.handle();

    handle
        .reset_with(layout("#######\n#P....#\n#######\n"))
        .await
        .unwrap();
    assert_eq!(handle.level().await.unwrap().remaining_pellets(), 4);

    let error = handle.reset_with(layout("###\n#.#\n")).await.unwrap_err();
    assert!(matches!(error, RuntimeError::Game(_)));
    assert_eq!(handle.level().await.unwrap().remaining_pellets(), 4);

    let unknown = handle.move_player(PlayerId(9), Direction::East).await;
    assert!(matches!(unknown, Err(RuntimeError::Game(_))));
}

#[tokio::test]
async fn building_without_a_session_fails() {
    let result = Runtime::builder().build().await;
    assert!(matches!(result, Err(RuntimeError::MissingSession)));
}

#[tokio::test]
async fn shutdown_waits_for_the_worker() {
    let runtime = runtime(scripted_session(CORRIDOR, &[]), true).await;
    let handle = runtime.handle();
    handle.start().await.unwrap();
    drop(handle);

    runtime.shutdown().await.unwrap();
}
