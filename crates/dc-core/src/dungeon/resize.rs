//! Map growth
//!
//! Doubling both dimensions tiles the old map into all four quadrants.
//! Only the top-left quadrant keeps the player marker.

use log::debug;

use super::map::checked_cells;
use super::{Map, Tile};
use crate::error::AllocError;

/// Consume `map` and return one with twice the rows and columns.
///
/// The old storage is released on every path, including failure.
/// Player coordinates stay valid since the top-left quadrant is unchanged.
pub fn resize(mut map: Map) -> Result<Map, AllocError> {
    let (rows, cols) = (map.rows(), map.cols());
    if map.is_empty() {
        return Err(AllocError::NonPositive {
            rows: rows as i64,
            cols: cols as i64,
        });
    }

    let new_rows = (rows as i64) * 2;
    let new_cols = (cols as i64) * 2;
    if let Err(err) = checked_cells(new_rows, new_cols) {
        map.release();
        return Err(err);
    }
    let mut grown = Map::new(new_rows, new_cols)?;

    for (r, row) in map.iter_rows().enumerate() {
        for (c, &tile) in row.iter().enumerate() {
            let copy = if tile == Tile::Player { Tile::Open } else { tile };
            grown.set(r, c, tile);
            grown.set(r + rows, c, copy);
            grown.set(r, c + cols, copy);
            grown.set(r + rows, c + cols, copy);
        }
    }

    map.release();
    debug!("resized map from {rows}x{cols} to {new_rows}x{new_cols}");
    Ok(grown)
}

impl Map {
    /// Double both dimensions in place. On failure the map is left empty.
    pub fn grow(&mut self) -> Result<(), AllocError> {
        *self = resize(core::mem::take(self))?;
        Ok(())
    }
}
