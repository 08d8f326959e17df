//! Player movement
//!
//! Validates a single step and applies its effect on the map.
//! Illegal steps are an ordinary outcome (`Stayed`), never an error.

use log::debug;

use super::Direction;
use crate::dungeon::{Map, MoveStatus, Tile};
use crate::player::Player;

/// Move the player one step in `direction`
pub fn try_move(map: &mut Map, player: &mut Player, direction: Direction) -> MoveStatus {
    let (dr, dc) = direction.delta();
    let status = do_move(
        map,
        player,
        player.row as i64 + dr,
        player.col as i64 + dc,
    );
    debug!(
        "move {direction}: {status}, player at ({}, {})",
        player.row, player.col
    );
    status
}

/// Move the player onto `(next_row, next_col)`.
///
/// Off-map targets, pillars and monsters keep the player in place, as does
/// the exit while the player carries no treasure. Any tile stepped onto
/// loses its special meaning.
pub fn do_move(map: &mut Map, player: &mut Player, next_row: i64, next_col: i64) -> MoveStatus {
    if !map.contains(next_row, next_col) {
        return MoveStatus::Stayed;
    }
    let (row, col) = (next_row as usize, next_col as usize);

    let status = match map.tile(row, col) {
        tile if tile.is_blocking() => return MoveStatus::Stayed,
        Tile::Exit if !player.has_treasure() => return MoveStatus::Stayed,
        Tile::Exit => MoveStatus::Escaped,
        Tile::Door => MoveStatus::LeftRoom,
        Tile::Treasure => {
            player.treasure += 1;
            MoveStatus::FoundTreasure
        }
        Tile::Amulet => MoveStatus::FoundAmulet,
        Tile::Open => MoveStatus::Moved,
        // the player's own cell: stepping in place
        _ => return MoveStatus::Stayed,
    };

    map.set(player.row, player.col, Tile::Open);
    map.set(row, col, Tile::Player);
    player.row = row;
    player.col = col;
    status
}
