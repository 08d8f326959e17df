//! Dungeon map
//!
//! Tile vocabulary, map storage, level loading and map growth.

mod loader;
mod map;
mod resize;
mod tile;

pub use loader::{load_from_reader, load_from_str, load_level};
pub use map::{Map, checked_cells};
pub use resize::resize;
pub use tile::{MoveStatus, Tile};
