//! Player input and movement

pub mod movement;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::symbols::SymbolTable;

pub use movement::{do_move, try_move};

/// Movement direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Stay,
}

impl Direction {
    /// Get the delta (drow, dcol) for this direction
    pub const fn delta(&self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Stay => (0, 0),
        }
    }

    /// Direction bound to a key. Unbound keys mean staying put.
    pub fn from_key(key: char, symbols: &SymbolTable) -> Self {
        let keys = symbols.keys();
        match key {
            k if k == keys.up => Direction::Up,
            k if k == keys.down => Direction::Down,
            k if k == keys.left => Direction::Left,
            k if k == keys.right => Direction::Right,
            _ => Direction::Stay,
        }
    }
}

/// One unit of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Direction),
    Quit,
}

impl Input {
    pub fn parse(key: char, symbols: &SymbolTable) -> Self {
        if key == symbols.keys().quit {
            Input::Quit
        } else {
            Input::Move(Direction::from_key(key, symbols))
        }
    }
}
