//! Map tiles and move outcomes

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Content of a single map cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Open = 0,
    Pillar = 1,
    Treasure = 2,
    Amulet = 3,
    Monster = 4,
    Door = 5,
    Exit = 6,
    /// Where the player currently stands
    Player = 7,
}

impl Tile {
    /// Nothing can step onto this tile
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Tile::Pillar | Tile::Monster)
    }

    /// Cuts a monster's line of sight
    pub const fn blocks_sight(&self) -> bool {
        matches!(self, Tile::Pillar)
    }

    /// Leads out of the current room
    pub const fn is_way_out(&self) -> bool {
        matches!(self, Tile::Door | Tile::Exit)
    }

    /// Can appear in a level file. The player marker is placed by position instead.
    pub const fn is_loadable(&self) -> bool {
        !matches!(self, Tile::Player)
    }
}

/// Outcome of a single player move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MoveStatus {
    Stayed,
    Moved,
    FoundTreasure,
    FoundAmulet,
    /// Went through a door into another room
    LeftRoom,
    /// Went through the dungeon exit carrying treasure
    Escaped,
}

impl MoveStatus {
    /// The player left the current room; monsters no longer act on it
    pub const fn ends_room(&self) -> bool {
        matches!(self, MoveStatus::LeftRoom | MoveStatus::Escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_pillar_and_monster_block() {
        let blocking: Vec<Tile> = Tile::iter().filter(Tile::is_blocking).collect();
        assert_eq!(blocking, vec![Tile::Pillar, Tile::Monster]);
    }

    #[test]
    fn test_only_pillar_blocks_sight() {
        for tile in Tile::iter() {
            assert_eq!(tile.blocks_sight(), tile == Tile::Pillar, "{tile}");
        }
    }

    #[test]
    fn test_player_marker_not_loadable() {
        assert_eq!(Tile::iter().filter(|t| !t.is_loadable()).count(), 1);
        assert!(!Tile::Player.is_loadable());
    }

    #[test]
    fn test_status_ends_room() {
        for status in MoveStatus::iter() {
            let expected = matches!(status, MoveStatus::LeftRoom | MoveStatus::Escaped);
            assert_eq!(status.ends_room(), expected, "{status}");
        }
    }

    #[test]
    fn test_default_tile_is_open() {
        assert_eq!(Tile::default(), Tile::Open);
    }
}
