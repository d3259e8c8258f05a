//! Small text-layout helpers shared by unit tests.
//!
//! `#` wall, ` ` floor, `.` pellet (10), `F` bonus (1000), `P` start,
//! `G` monster (kinds assigned in rotation).

use crate::board::{Board, Terrain};
use crate::collectible::CollectibleKind;
use crate::level::Level;
use crate::types::Position;
use crate::unit::MonsterKind;

pub(crate) fn board_from_rows(rows: &[&str]) -> Board {
    let width = rows[0].chars().count() as u32;
    let terrain = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|tile| if tile == '#' { Terrain::Wall } else { Terrain::Floor })
        .collect();
    Board::new(width, rows.len() as u32, terrain).unwrap()
}

pub(crate) fn level_from_rows(rows: &[&str]) -> Level {
    let mut builder = Level::builder(board_from_rows(rows));
    let mut monsters = 0;

    for (y, row) in rows.iter().enumerate() {
        for (x, tile) in row.chars().enumerate() {
            let position = Position::new(x as i32, y as i32);
            builder = match tile {
                '.' => builder.collectible(CollectibleKind::Pellet, 10, position),
                'F' => builder.collectible(CollectibleKind::Bonus, 1000, position),
                'P' => builder.player_start(position),
                'G' => {
                    let kind = MonsterKind::ROTATION[monsters % MonsterKind::ROTATION.len()];
                    monsters += 1;
                    builder.monster(kind, position)
                }
                _ => builder,
            };
        }
    }

    builder.build().unwrap()
}
