//! Monster pursuit
//!
//! Looking outward from the player along each axis, the nearest monster
//! with an unbroken line of sight steps one cell toward the player.
//! Pillars break line of sight; every other tile is seen through.

use log::trace;

use crate::action::Direction;
use crate::dungeon::{Map, Tile};
use crate::player::Player;

/// Rays are scanned in this order. When several monsters reach the player
/// in one call, the one on the latest ray is left holding the player's cell.
pub const SCAN_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Right,
    Direction::Left,
];

/// Advance every monster that can see the player.
///
/// Returns true when a monster stepped onto the player's cell. The player
/// record is not touched; deciding what being caught means is the caller's job.
pub fn pursue(map: &mut Map, player: &Player) -> bool {
    let mut caught = false;
    for direction in SCAN_ORDER {
        if let Some(distance) = advance_along(map, player, direction) {
            trace!("monster {direction} of player advanced from distance {distance}");
            caught |= distance == 1;
        }
    }
    caught
}

/// Scan one ray and step its nearest visible monster. Returns that
/// monster's distance from the player before it moved.
fn advance_along(map: &mut Map, player: &Player, direction: Direction) -> Option<usize> {
    let (dr, dc) = direction.delta();
    let (prow, pcol) = (player.row as i64, player.col as i64);

    let mut distance = 1i64;
    loop {
        let (row, col) = (prow + dr * distance, pcol + dc * distance);
        if !map.contains(row, col) {
            return None;
        }
        match map.tile(row as usize, col as usize) {
            tile if tile.blocks_sight() => return None,
            Tile::Monster => {
                let (to_row, to_col) = (row - dr, col - dc);
                map.set(row as usize, col as usize, Tile::Open);
                map.set(to_row as usize, to_col as usize, Tile::Monster);
                return Some(distance as usize);
            }
            _ => distance += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolTable;
    use crate::dungeon::load_from_str;
    use strum::IntoEnumIterator;

    fn level(source: &str) -> (Map, Player) {
        load_from_str(source, &SymbolTable::default()).unwrap()
    }

    #[test]
    fn test_adjacent_monster_catches() {
        let (mut map, player) = level("1 3 0 0 -M!");
        assert!(pursue(&mut map, &player));
        assert_eq!(map.tile(0, 0), Tile::Monster);
        assert_eq!(map.tile(0, 1), Tile::Open);
        assert_eq!(map.tile(0, 2), Tile::Exit);
    }

    #[test]
    fn test_distant_monster_closes_in() {
        let (mut map, player) = level("1 5 0 0 ---M!");
        assert!(!pursue(&mut map, &player));
        assert_eq!(map.find(Tile::Monster), Some((0, 2)));
        assert!(!pursue(&mut map, &player));
        assert_eq!(map.find(Tile::Monster), Some((0, 1)));
        assert!(pursue(&mut map, &player));
        assert_eq!(map.find(Tile::Monster), Some((0, 0)));
        assert_eq!(map.count(Tile::Monster), 1);
    }

    #[test]
    fn test_pillar_blocks_sight() {
        let (mut map, player) = level("1 5 0 0 -+-M!");
        let before = map.clone();
        for _ in 0..10 {
            assert!(!pursue(&mut map, &player));
        }
        assert_eq!(map, before);
    }

    #[test]
    fn test_only_sight_blockers_stop_pursuit() {
        for tile in Tile::iter().filter(|&t| t != Tile::Player && t != Tile::Monster) {
            let (mut map, player) = level("1 4 0 0 --!M");
            map.set(0, 1, tile);
            pursue(&mut map, &player);
            assert_eq!(map.tile(0, 3) == Tile::Monster, tile.blocks_sight(), "{tile}");
        }
    }

    #[test]
    fn test_monster_walks_over_items() {
        let (mut map, player) = level("4 1 3 0 M $ ? -");
        assert!(!pursue(&mut map, &player));
        // the treasure under the monster's path is gone
        assert_eq!(map.tile(1, 0), Tile::Monster);
        assert_eq!(map.tile(0, 0), Tile::Open);
    }

    #[test]
    fn test_only_nearest_monster_moves() {
        let (mut map, player) = level("1 5 0 0 --MM!");
        assert!(!pursue(&mut map, &player));
        assert_eq!(map.tile(0, 1), Tile::Monster);
        assert_eq!(map.tile(0, 2), Tile::Open);
        assert_eq!(map.tile(0, 3), Tile::Monster);
    }

    #[test]
    fn test_all_four_rays() {
        let (mut map, player) = level("5 5 2 2 --M-- ----- M---M ----- --M-!");
        assert!(!pursue(&mut map, &player));
        assert_eq!(map.tile(1, 2), Tile::Monster);
        assert_eq!(map.tile(3, 2), Tile::Monster);
        assert_eq!(map.tile(2, 1), Tile::Monster);
        assert_eq!(map.tile(2, 3), Tile::Monster);
        assert_eq!(map.count(Tile::Monster), 4);
        assert!(pursue(&mut map, &player));
    }

    #[test]
    fn test_player_record_untouched() {
        let (mut map, player) = level("1 3 0 0 -M!");
        let before = player;
        pursue(&mut map, &player);
        assert_eq!(player, before);
    }

    #[test]
    fn test_diagonal_monster_ignored() {
        let (mut map, player) = level("2 2 0 0 --!M");
        let before = map.clone();
        assert!(!pursue(&mut map, &player));
        assert_eq!(map, before);
    }

    #[test]
    fn test_two_adjacent_monsters_last_ray_wins_cell() {
        // up scans before left, so the left monster is the one left standing
        let (mut map, player) = level("2 2 1 1 !M M-");
        assert!(pursue(&mut map, &player));
        assert_eq!(map.tile(1, 1), Tile::Monster);
        assert_eq!(map.tile(0, 1), Tile::Open);
        assert_eq!(map.tile(1, 0), Tile::Open);
        assert_eq!(map.count(Tile::Monster), 1);
    }
}
