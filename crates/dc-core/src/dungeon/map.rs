//! Map storage
//!
//! A single contiguous buffer of tiles addressed by `row * cols + col`.

use core::fmt;
use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};

use super::Tile;
use crate::consts::MAX_CELLS;
use crate::error::AllocError;
use crate::symbols::SymbolTable;

/// Check that `rows x cols` is a valid map size and return the cell count
pub fn checked_cells(rows: i64, cols: i64) -> Result<usize, AllocError> {
    if rows <= 0 || cols <= 0 {
        return Err(AllocError::NonPositive { rows, cols });
    }
    rows.checked_mul(cols)
        .filter(|&cells| cells <= i64::from(MAX_CELLS))
        .and_then(|cells| usize::try_from(cells).ok())
        .ok_or(AllocError::Overflow { rows, cols })
}

/// `len` open cells, without aborting when memory runs out
fn open_cells(len: usize) -> Result<Vec<Tile>, TryReserveError> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(len)?;
    cells.resize(len, Tile::Open);
    Ok(cells)
}

/// Dungeon map
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "MapData")]
pub struct Map {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

/// Unchecked serialized map
#[derive(Deserialize)]
struct MapData {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

impl TryFrom<MapData> for Map {
    type Error = String;

    fn try_from(data: MapData) -> Result<Self, Self::Error> {
        if data.rows.checked_mul(data.cols) != Some(data.cells.len()) {
            return Err(format!(
                "{}x{} map holds {} cells",
                data.rows,
                data.cols,
                data.cells.len()
            ));
        }
        if data.rows == 0 || data.cols == 0 {
            return Ok(Self::default());
        }
        Ok(Self {
            rows: data.rows,
            cols: data.cols,
            cells: data.cells,
        })
    }
}

impl Map {
    /// Allocate a `rows x cols` map with every cell open
    pub fn new(rows: i64, cols: i64) -> Result<Self, AllocError> {
        let len = checked_cells(rows, cols)?;
        let cells = open_cells(len).map_err(|_| AllocError::OutOfMemory { rows, cols })?;
        Ok(Self {
            rows: rows as usize,
            cols: cols as usize,
            cells,
        })
    }

    /// Free the grid storage, leaving an empty map. Releasing twice is a no-op.
    pub fn release(&mut self) {
        self.cells = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a signed position lies on the map
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as u64) < self.rows as u64 && (col as u64) < self.cols as u64
    }

    /// Tile at a position, or `None` off the map
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Tile at a position already known to be on the map
    ///
    /// # Panics
    /// Panics when the position is off the map.
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) off map");
        self.cells[self.index(row, col)]
    }

    /// Overwrite a cell. Returns false (and changes nothing) off the map.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = tile;
            true
        } else {
            false
        }
    }

    /// Rows of tiles, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks() rejects a zero size; an empty map has no rows anyway
        self.cells.chunks(self.cols.max(1))
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Find the first cell holding `tile`, in row-major order
    pub fn find(&self, tile: Tile) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&t| t == tile)
            .map(|idx| (idx / self.cols, idx % self.cols))
    }

    /// Render with the given glyphs, one line per row
    pub fn render(&self, symbols: &SymbolTable) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows);
        for row in self.iter_rows() {
            out.extend(row.iter().map(|&tile| symbols.glyph(tile)));
            out.push('\n');
        }
        out
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&SymbolTable::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_all_open() {
        let map = Map::new(3, 4).unwrap();
        assert_eq!(map.rows(), 3);
        assert_eq!(map.cols(), 4);
        assert_eq!(map.count(Tile::Open), 12);
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(
            Map::new(0, 5),
            Err(AllocError::NonPositive { rows: 0, cols: 5 })
        );
        assert!(Map::new(5, -1).is_err());
        assert!(Map::new(-2, -2).is_err());
    }

    #[test]
    fn test_new_rejects_overflow() {
        let rows = i64::from(i32::MAX);
        assert_eq!(
            checked_cells(rows, 2),
            Err(AllocError::Overflow { rows, cols: 2 })
        );
        assert!(checked_cells(65_536, 65_536).is_err());
        assert_eq!(checked_cells(i64::from(i32::MAX), 1), Ok(i32::MAX as usize));
    }

    #[test]
    fn test_unreservable_cells_fail_cleanly() {
        assert!(open_cells(usize::MAX).is_err());
        assert_eq!(open_cells(3).unwrap(), vec![Tile::Open; 3]);
    }

    #[test]
    fn test_release_twice() {
        let mut map = Map::new(2, 2).unwrap();
        map.release();
        assert!(map.is_empty());
        assert_eq!(map.rows(), 0);
        map.release();
        assert!(map.is_empty());
        assert_eq!(map.rows(), 0);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut map = Map::new(2, 3).unwrap();
        assert!(map.set(1, 2, Tile::Door));
        assert_eq!(map.get(1, 2), Some(Tile::Door));
        assert_eq!(map.tile(1, 2), Tile::Door);
        assert!(!map.set(2, 0, Tile::Door));
        assert_eq!(map.get(0, 3), None);
        assert_eq!(map.find(Tile::Door), Some((1, 2)));
    }

    #[test]
    fn test_contains_signed() {
        let map = Map::new(2, 3).unwrap();
        assert!(map.contains(0, 0));
        assert!(map.contains(1, 2));
        assert!(!map.contains(-1, 0));
        assert!(!map.contains(0, 3));
        assert!(!map.contains(2, 0));
    }

    #[test]
    fn test_render() {
        let mut map = Map::new(2, 3).unwrap();
        map.set(0, 0, Tile::Player);
        map.set(1, 2, Tile::Exit);
        assert_eq!(map.to_string(), "o--\n--!\n");
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let map: Map =
            serde_json::from_str(r#"{"rows":1,"cols":2,"cells":["Open","Exit"]}"#).unwrap();
        assert_eq!(map.tile(0, 1), Tile::Exit);
        let bad = serde_json::from_str::<Map>(r#"{"rows":2,"cols":2,"cells":["Open"]}"#);
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_new_is_open_everywhere(rows in 1i64..40, cols in 1i64..40) {
            let map = Map::new(rows, cols).unwrap();
            prop_assert_eq!(map.iter_rows().count(), rows as usize);
            for row in map.iter_rows() {
                prop_assert_eq!(row.len(), cols as usize);
                prop_assert!(row.iter().all(|&t| t == Tile::Open));
            }
        }
    }
}
