//! Level loading
//!
//! Level files are whitespace-delimited text:
//!
//! ```text
//! rows cols
//! player_row player_col
//! <rows * cols tile glyphs, row-major; whitespace between glyphs is ignored>
//! ```
//!
//! Any deviation rejects the whole level; no partial map is returned.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use super::{Map, Tile};
use crate::error::LoadError;
use crate::player::Player;
use crate::symbols::SymbolTable;

/// Load a level file
pub fn load_level(
    path: impl AsRef<Path>,
    symbols: &SymbolTable,
) -> Result<(Map, Player), LoadError> {
    let path = path.as_ref();
    let result = File::open(path)
        .map_err(LoadError::from)
        .and_then(|file| load_from_reader(BufReader::new(file), symbols));
    if let Err(err) = &result {
        warn!("rejected level {}: {err}", path.display());
    }
    result
}

/// Load a level from any byte source
pub fn load_from_reader(
    mut reader: impl Read,
    symbols: &SymbolTable,
) -> Result<(Map, Player), LoadError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    load_from_str(&source, symbols)
}

/// Load a level from its text
pub fn load_from_str(source: &str, symbols: &SymbolTable) -> Result<(Map, Player), LoadError> {
    let (map, player) = parse(source, symbols)?;
    debug!(
        "loaded {}x{} level, player at ({}, {})",
        map.rows(),
        map.cols(),
        player.row,
        player.col
    );
    Ok((map, player))
}

fn parse(source: &str, symbols: &SymbolTable) -> Result<(Map, Player), LoadError> {
    let mut scanner = Scanner::new(source);

    let rows = scanner.next_int("row count")?;
    let cols = scanner.next_int("column count")?;
    if i64::from(rows) * i64::from(cols) <= 1 {
        return Err(LoadError::Degenerate { rows, cols });
    }
    let mut map = Map::new(i64::from(rows), i64::from(cols))?;

    let row = scanner.next_int("player row")?;
    let col = scanner.next_int("player column")?;
    if !map.contains(i64::from(row), i64::from(col)) {
        return Err(LoadError::PlayerOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    let player = Player::new(row as usize, col as usize);

    let expected = map.rows() * map.cols();
    for (idx, cell) in map.cells_mut().iter_mut().enumerate() {
        let Some(symbol) = scanner.next_char() else {
            return Err(LoadError::TileCount {
                expected,
                found: idx,
            });
        };
        let (r, c) = (idx / cols as usize, idx % cols as usize);
        if (r, c) == (player.row, player.col) {
            // whatever the file has under the player is discarded
            *cell = Tile::Player;
            continue;
        }
        *cell = symbols
            .tile(symbol)
            .filter(Tile::is_loadable)
            .ok_or(LoadError::InvalidSymbol {
                symbol,
                row: r,
                col: c,
            })?;
    }

    if let Some(extra) = scanner.next_char() {
        return Err(LoadError::TrailingContent(extra));
    }

    if !map.cells().iter().any(Tile::is_way_out) {
        return Err(LoadError::NoWayOut);
    }

    Ok((map, player))
}

/// Character scanner with stream-extraction semantics: integers and glyphs
/// are both preceded by any amount of whitespace.
struct Scanner<'a> {
    chars: core::iter::Peekable<core::str::Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    /// Next non-whitespace character
    fn next_char(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.next()
    }

    /// Optionally signed decimal integer; stops at the first non-digit
    fn next_int(&mut self, field: &'static str) -> Result<i32, LoadError> {
        self.skip_whitespace();
        let mut token = String::new();
        if let Some(sign) = self.chars.next_if(|&c| c == '-' || c == '+') {
            token.push(sign);
        }
        while let Some(digit) = self.chars.next_if(char::is_ascii_digit) {
            token.push(digit);
        }
        if token.is_empty() && self.chars.peek().is_none() {
            return Err(LoadError::MissingToken(field));
        }
        token
            .parse()
            .map_err(|_| LoadError::MalformedInteger { field, token })
    }
}
