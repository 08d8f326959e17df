//! Turn sequencing
//!
//! One turn is a player move followed, unless the player left the room,
//! by monster pursuit. Game-over decisions stay with the driver.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::action::{Direction, try_move};
use crate::dungeon::{self, Map, MoveStatus, Tile};
use crate::error::{AllocError, LoadError};
use crate::monster::pursue;
use crate::player::Player;
use crate::symbols::SymbolTable;

/// Result of a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub status: MoveStatus,
    /// A monster reached the player's cell this turn
    pub caught: bool,
}

/// Map and player owned by the driver across turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateData")]
pub struct GameState {
    pub map: Map,
    pub player: Player,
    /// Turns taken so far
    pub turns: u64,
}

/// Unchecked serialized game state
#[derive(Deserialize)]
struct GameStateData {
    map: Map,
    player: Player,
    turns: u64,
}

impl TryFrom<GameStateData> for GameState {
    type Error = String;

    /// The player must stand on the map, and the player marker may only sit
    /// under them. A monster may hold that cell once the player is caught.
    fn try_from(data: GameStateData) -> Result<Self, Self::Error> {
        let (row, col) = data.player.position();
        let Some(under) = data.map.get(row, col) else {
            return Err(format!(
                "player at ({row}, {col}) is outside the {}x{} map",
                data.map.rows(),
                data.map.cols()
            ));
        };
        if !matches!(under, Tile::Player | Tile::Monster) {
            return Err(format!("player cell ({row}, {col}) holds {under}"));
        }
        let markers = data.map.count(Tile::Player);
        if markers != usize::from(under == Tile::Player) {
            return Err(format!("map holds {markers} player markers"));
        }
        Ok(Self {
            map: data.map,
            player: data.player,
            turns: data.turns,
        })
    }
}

impl GameState {
    pub fn new(map: Map, player: Player) -> Self {
        Self {
            map,
            player,
            turns: 0,
        }
    }

    /// Load a level file
    pub fn load(path: impl AsRef<Path>, symbols: &SymbolTable) -> Result<Self, LoadError> {
        let (map, player) = dungeon::load_level(path, symbols)?;
        Ok(Self::new(map, player))
    }

    /// Parse a level from its text
    pub fn from_source(source: &str, symbols: &SymbolTable) -> Result<Self, LoadError> {
        let (map, player) = dungeon::load_from_str(source, symbols)?;
        Ok(Self::new(map, player))
    }

    /// Move the player, then let monsters with line of sight close in
    pub fn take_turn(&mut self, direction: Direction) -> TurnOutcome {
        self.turns += 1;
        let status = try_move(&mut self.map, &mut self.player, direction);
        let caught = !status.ends_room() && pursue(&mut self.map, &self.player);
        if caught {
            info!(
                "player caught at ({}, {}) on turn {}",
                self.player.row, self.player.col, self.turns
            );
        }
        TurnOutcome { status, caught }
    }

    /// Double the dungeon. The player keeps their coordinates.
    pub fn grow(&mut self) -> Result<(), AllocError> {
        self.map.grow()
    }

    pub fn render(&self, symbols: &SymbolTable) -> String {
        self.map.render(symbols)
    }
}
