//! Plain text rendering of a level.

use std::fmt::Write;

use game_core::{CollectibleKind, Level, LevelStatus, Occupant, PlayerId, Terrain, UnitId};
use runtime::GameSnapshot;

/// One character per cell: units over collectibles over terrain.
pub fn render_level(level: &Level) -> String {
    let board = level.board();
    let mut out = String::with_capacity(((board.width() + 1) * board.height()) as usize);

    for y in 0..board.height() as i32 {
        for x in 0..board.width() as i32 {
            let position = game_core::Position::new(x, y);
            out.push(glyph(level, position));
        }
        out.push('\n');
    }
    out
}

fn glyph(level: &Level, position: game_core::Position) -> char {
    let board = level.board();
    let occupants = board.occupants(position);

    let unit = occupants
        .iter()
        .filter_map(|occupant| match occupant {
            Occupant::Unit(unit) => Some(*unit),
            Occupant::Collectible(_) => None,
        })
        .min_by_key(|unit| matches!(unit, UnitId::Monster(_)));
    match unit {
        Some(UnitId::Player(_)) => return 'P',
        Some(UnitId::Monster(_)) => return 'G',
        None => {}
    }
    // Killed players are off the board but keep their last position.
    if level
        .players()
        .iter()
        .any(|player| !player.is_alive() && player.position() == Some(position))
    {
        return 'X';
    }

    let collectible = occupants.iter().find_map(|occupant| match occupant {
        Occupant::Collectible(id) => level.collectible(*id),
        Occupant::Unit(_) => None,
    });
    match (collectible.map(|c| c.kind()), board.terrain(position)) {
        (Some(CollectibleKind::Pellet), _) => '.',
        (Some(CollectibleKind::Bonus), _) => 'F',
        (None, Some(Terrain::Wall)) => '#',
        (None, _) => ' ',
    }
}

/// Board plus a status line.
pub fn render(snapshot: &GameSnapshot) -> String {
    let mut out = render_level(&snapshot.level);
    let scores: Vec<String> = snapshot
        .players()
        .iter()
        .map(|player| format!("{}: {}", player.id(), player.score()))
        .collect();
    let state = match snapshot.outcome {
        Some(status) => outcome_label(status),
        None if snapshot.is_in_progress() => "running",
        None => "stopped",
    };
    let _ = write!(
        out,
        "score {} | pellets left {} | {}",
        scores.join(", "),
        snapshot.level.remaining_pellets(),
        state
    );
    out
}

pub fn banner(status: LevelStatus, scores: &[(PlayerId, u32)]) -> String {
    let total: u32 = scores.iter().map(|(_, score)| score).sum();
    format!("*** {} *** final score {}", outcome_label(status), total)
}

fn outcome_label(status: LevelStatus) -> &'static str {
    match status {
        LevelStatus::Won => "you won",
        LevelStatus::Lost => "game over",
        LevelStatus::InPlay => "running",
    }
}
