//! Symbol table shared by the level loader, map rendering and input parsing
//!
//! One immutable table maps every tile to its level-file glyph and every
//! direction to its input key. Drivers may load a replacement from JSON;
//! omitted fields keep their defaults.

use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::dungeon::Tile;
use crate::error::ConfigError;

/// Glyph used for each tile in level files and rendered maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub open: char,
    pub player: char,
    pub treasure: char,
    pub amulet: char,
    pub monster: char,
    pub pillar: char,
    pub door: char,
    pub exit: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            open: TILE_OPEN,
            player: TILE_PLAYER,
            treasure: TILE_TREASURE,
            amulet: TILE_AMULET,
            monster: TILE_MONSTER,
            pillar: TILE_PILLAR,
            door: TILE_DOOR,
            exit: TILE_EXIT,
        }
    }
}

/// Input keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keys {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    pub stay: char,
    pub quit: char,
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            up: MOVE_UP,
            down: MOVE_DOWN,
            left: MOVE_LEFT,
            right: MOVE_RIGHT,
            stay: INPUT_STAY,
            quit: INPUT_QUIT,
        }
    }
}

/// Serialized form of a symbol table
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    pub glyphs: Glyphs,
    pub keys: Keys,
}

/// Validated, indexed symbol table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SymbolConfig", into = "SymbolConfig")]
pub struct SymbolTable {
    glyphs: Glyphs,
    keys: Keys,
    decode: HashMap<char, Tile>,
}

impl SymbolTable {
    /// Build a table, rejecting clashing or whitespace symbols
    pub fn new(glyphs: Glyphs, keys: Keys) -> Result<Self, ConfigError> {
        let tiles = [
            (Tile::Open, glyphs.open),
            (Tile::Player, glyphs.player),
            (Tile::Treasure, glyphs.treasure),
            (Tile::Amulet, glyphs.amulet),
            (Tile::Monster, glyphs.monster),
            (Tile::Pillar, glyphs.pillar),
            (Tile::Door, glyphs.door),
            (Tile::Exit, glyphs.exit),
        ];

        let mut decode = HashMap::with_capacity(tiles.len());
        for (tile, glyph) in tiles {
            if glyph.is_whitespace() {
                return Err(ConfigError::Whitespace(format!("{tile} glyph")));
            }
            if let Some(previous) = decode.insert(glyph, tile) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol: glyph,
                    first: previous.to_string(),
                    second: tile.to_string(),
                });
            }
        }

        let bindings = [
            ("up", keys.up),
            ("down", keys.down),
            ("left", keys.left),
            ("right", keys.right),
            ("stay", keys.stay),
            ("quit", keys.quit),
        ];
        let mut seen: HashMap<char, &str> = HashMap::with_capacity(bindings.len());
        for (name, key) in bindings {
            if key.is_whitespace() {
                return Err(ConfigError::Whitespace(format!("{name} key")));
            }
            if let Some(previous) = seen.insert(key, name) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol: key,
                    first: previous.to_string(),
                    second: name.to_string(),
                });
            }
        }

        Ok(Self {
            glyphs,
            keys,
            decode,
        })
    }

    /// Parse a table from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SymbolConfig = serde_json::from_str(json)?;
        Self::try_from(config)
    }

    /// Load a table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Glyph for a tile
    pub const fn glyph(&self, tile: Tile) -> char {
        match tile {
            Tile::Open => self.glyphs.open,
            Tile::Player => self.glyphs.player,
            Tile::Treasure => self.glyphs.treasure,
            Tile::Amulet => self.glyphs.amulet,
            Tile::Monster => self.glyphs.monster,
            Tile::Pillar => self.glyphs.pillar,
            Tile::Door => self.glyphs.door,
            Tile::Exit => self.glyphs.exit,
        }
    }

    /// Tile drawn with this glyph, if any
    pub fn tile(&self, glyph: char) -> Option<Tile> {
        self.decode.get(&glyph).copied()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        let keys = Keys::default();
        let decode = [
            (glyphs.open, Tile::Open),
            (glyphs.player, Tile::Player),
            (glyphs.treasure, Tile::Treasure),
            (glyphs.amulet, Tile::Amulet),
            (glyphs.monster, Tile::Monster),
            (glyphs.pillar, Tile::Pillar),
            (glyphs.door, Tile::Door),
            (glyphs.exit, Tile::Exit),
        ]
        .into_iter()
        .collect();
        Self {
            glyphs,
            keys,
            decode,
        }
    }
}

impl TryFrom<SymbolConfig> for SymbolTable {
    type Error = ConfigError;

    fn try_from(config: SymbolConfig) -> Result<Self, Self::Error> {
        Self::new(config.glyphs, config.keys)
    }
}

impl From<SymbolTable> for SymbolConfig {
    fn from(table: SymbolTable) -> Self {
        Self {
            glyphs: table.glyphs,
            keys: table.keys,
        }
    }
}
