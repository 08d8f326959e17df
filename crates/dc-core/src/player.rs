//! Player record

use serde::{Deserialize, Serialize};

/// The player's position and carried treasure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    pub row: usize,
    pub col: usize,
    pub treasure: u32,
}

impl Player {
    /// New player at a position with no treasure
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            treasure: 0,
        }
    }

    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub const fn has_treasure(&self) -> bool {
        self.treasure > 0
    }
}
