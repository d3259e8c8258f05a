//! Role-based collision rules applied after a unit enters a cell.
//!
//! | mover \ occupant | player | monster | collectible |
//! |---|---|---|---|
//! | player  | (never shares) | player dies | consumed |
//! | monster | player dies | - | - |
//!
//! Kills are resolved before consumption. A player killed during a step
//! consumes nothing in that step. A killed player leaves the board but keeps
//! its last position, so the cell stays open to its teammates.

use crate::board::Occupant;
use crate::collectible::CollectibleKind;
use crate::types::{CollectibleId, MonsterId, PlayerId, Position, UnitId};

use super::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Collision {
    PlayerKilled {
        player: PlayerId,
        monster: MonsterId,
    },
    Consumed {
        player: PlayerId,
        collectible: CollectibleId,
        kind: CollectibleKind,
        value: u32,
    },
}

pub(super) fn resolve(level: &mut Level, mover: UnitId, at: Position) -> Vec<Collision> {
    let others: Vec<Occupant> = level
        .board
        .occupants(at)
        .iter()
        .copied()
        .filter(|occupant| *occupant != Occupant::Unit(mover))
        .collect();

    let mut collisions = Vec::new();

    for other in &others {
        let Occupant::Unit(other) = *other else {
            continue;
        };
        let Some((player_id, monster_id)) = hostile_pair(mover, other) else {
            continue;
        };
        if let Some(player) = level.player_mut(player_id)
            && player.is_alive()
        {
            player.kill(monster_id);
            level
                .board
                .remove(at, Occupant::Unit(UnitId::Player(player_id)));
            collisions.push(Collision::PlayerKilled {
                player: player_id,
                monster: monster_id,
            });
        }
    }

    let UnitId::Player(player_id) = mover else {
        return collisions;
    };
    if !level.player(player_id).is_some_and(|player| player.is_alive()) {
        return collisions;
    }

    for other in others {
        if let Occupant::Collectible(collectible_id) = other
            && let Some(collision) = level.consume(player_id, collectible_id)
        {
            collisions.push(collision);
        }
    }

    collisions
}

fn hostile_pair(mover: UnitId, other: UnitId) -> Option<(PlayerId, MonsterId)> {
    match (mover, other) {
        (UnitId::Player(player), UnitId::Monster(monster))
        | (UnitId::Monster(monster), UnitId::Player(player)) => Some((player, monster)),
        _ => None,
    }
}
