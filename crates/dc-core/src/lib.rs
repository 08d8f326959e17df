//! dc-core: Core simulation for a tile-based dungeon crawler
//!
//! Owns the dungeon map, loads it from its textual level format and
//! resolves player movement and monster pursuit each turn.
//! Terminal input and rendering belong to the driver.

pub mod action;
pub mod dungeon;
pub mod error;
pub mod monster;
pub mod player;
pub mod symbols;

mod consts;
mod gameloop;

pub use consts::*;
pub use error::{AllocError, ConfigError, LoadError};
pub use gameloop::{GameState, TurnOutcome};
pub use player::Player;
pub use symbols::SymbolTable;
