//! Default glyphs and key bindings
//!
//! These are the level-file and keyboard contract shared with the
//! level tooling. `SymbolTable::default()` is built from them.

/// Map symbols
pub const TILE_OPEN: char = '-';
pub const TILE_PLAYER: char = 'o';
pub const TILE_TREASURE: char = '$';
pub const TILE_AMULET: char = '@';
pub const TILE_MONSTER: char = 'M';
pub const TILE_PILLAR: char = '+';
pub const TILE_DOOR: char = '?';
pub const TILE_EXIT: char = '!';

/// Keyboard inputs
pub const INPUT_QUIT: char = 'q';
pub const INPUT_STAY: char = 'e';
pub const MOVE_UP: char = 'w';
pub const MOVE_LEFT: char = 'a';
pub const MOVE_DOWN: char = 's';
pub const MOVE_RIGHT: char = 'd';

/// Largest cell count a map may hold; rows * cols may not exceed it.
pub const MAX_CELLS: i32 = i32::MAX;
