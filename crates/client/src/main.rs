use std::sync::Arc;

use anyhow::Result;
use game_content::{ConfigLoader, Layout, LayoutLoader};
use game_core::{ClassicPolicies, GameConfig, GameSession, PlayerId, SinglePlayer};
use pacman_client::render;
use pacman_client::{ClientConfig, InputCommand, input, logging};
use runtime::{Event, GameHandle, LifecycleEvent, Runtime, Topic};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;

const PLAYER: PlayerId = PlayerId(0);

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.session_id.as_deref())?;

    let layout = load_layout(&config)?;
    tracing::info!(
        "Loaded {}x{} layout with {} collectibles and {} monsters",
        layout.width(),
        layout.height(),
        layout.collectible_count(),
        layout.monster_count()
    );

    tracing::info!("Monster seed: {}", config.seed);
    let session = GameSession::new(
        SinglePlayer,
        Arc::new(layout),
        Arc::new(ClassicPolicies::new(config.seed)),
        [PLAYER],
    )?;
    let runtime = Runtime::builder()
        .config(config.runtime.clone())
        .session(session)
        .build()
        .await?;
    let handle = runtime.handle();

    let announcer = tokio::spawn(announce(runtime.subscribe(Topic::Lifecycle)));

    println!("{}", input::HELP);
    println!("{}", render::render(&handle.snapshot().await?));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = input::parse(&line) else {
            println!("unknown command {:?}, try 'help'", line.trim());
            continue;
        };
        if command == InputCommand::Quit {
            break;
        }
        execute(&handle, command).await?;
        println!("{}", render::render(&handle.snapshot().await?));
    }

    drop(handle);
    announcer.abort();
    runtime.shutdown().await?;
    tracing::info!("Client exited");
    Ok(())
}

fn load_layout(config: &ClientConfig) -> Result<Layout> {
    let rules = match &config.rules {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let layout = match &config.level {
        Some(path) => LayoutLoader::load_with(path, rules)?,
        None => Layout::classic()?.with_config(rules),
    };
    Ok(layout)
}

async fn execute(handle: &GameHandle, command: InputCommand) -> Result<()> {
    match command {
        InputCommand::Move(direction) => {
            handle.move_player(PLAYER, direction).await?;
        }
        InputCommand::Start => {
            if !handle.start().await? {
                println!("already running or finished, try 'reset'");
            }
        }
        InputCommand::Stop => {
            handle.stop().await?;
        }
        InputCommand::Reset => handle.reset().await?,
        InputCommand::Tick => {
            handle.tick_monsters().await?;
        }
        InputCommand::Help => println!("{}", input::HELP),
        InputCommand::Quit => {}
    }
    Ok(())
}

async fn announce(mut events: broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(Event::Lifecycle(LifecycleEvent::Finished { status, scores })) => {
                println!("{}", render::banner(status, &scores));
            }
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("Lifecycle listener lagged by {} events", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
