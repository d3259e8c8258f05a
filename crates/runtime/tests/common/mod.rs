#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use game_content::Layout;
use game_core::{
    Direction, GameConfig, GameSession, LevelSource, Monster, MovementPolicy, PlayerId, Scripted,
    SinglePlayer,
};
use runtime::{Runtime, RuntimeConfig, TempoConfig};

pub const PLAYER: PlayerId = PlayerId(0);
pub const TICK: Duration = Duration::from_millis(100);

pub fn layout(rows: &str) -> Arc<dyn LevelSource> {
    Arc::new(Layout::parse(rows, GameConfig::default()).unwrap())
}

/// Session whose monsters replay `steps` once.
pub fn scripted_session(rows: &str, steps: &'static [Direction]) -> GameSession {
    GameSession::new(
        SinglePlayer,
        layout(rows),
        Arc::new(move |_: &Monster| -> Box<dyn MovementPolicy> {
            Box::new(Scripted::new(steps.iter().copied()))
        }),
        [PLAYER],
    )
    .unwrap()
}

pub fn config(autonomous_monsters: bool) -> RuntimeConfig {
    RuntimeConfig {
        tempo: TempoConfig::uniform(TICK),
        autonomous_monsters,
        ..RuntimeConfig::default()
    }
}

pub async fn runtime(session: GameSession, autonomous_monsters: bool) -> Runtime {
    Runtime::builder()
        .config(config(autonomous_monsters))
        .session(session)
        .build()
        .await
        .unwrap()
}
