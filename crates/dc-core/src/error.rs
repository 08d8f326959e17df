//! Error types for map allocation, level loading and symbol configuration

use thiserror::Error;

/// Map storage could not be allocated for the requested dimensions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    #[error("map dimensions must be positive, got {rows}x{cols}")]
    NonPositive { rows: i64, cols: i64 },

    #[error("map of {rows}x{cols} cells overflows the addressable cell count")]
    Overflow { rows: i64, cols: i64 },

    #[error("out of memory allocating a {rows}x{cols} map")]
    OutOfMemory { rows: i64, cols: i64 },
}

/// A level source was rejected.
///
/// The driver treats every variant the same way (the level did not load);
/// the variant only says why, for logging.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read level: {0}")]
    Io(#[from] std::io::Error),

    #[error("level ended before the {0}")]
    MissingToken(&'static str),

    #[error("malformed {field}: '{token}'")]
    MalformedInteger { field: &'static str, token: String },

    #[error("degenerate dungeon: {rows}x{cols} has at most one cell")]
    Degenerate { rows: i32, cols: i32 },

    #[error("player position ({row}, {col}) is outside the {rows}x{cols} map")]
    PlayerOutOfBounds {
        row: i32,
        col: i32,
        rows: i32,
        cols: i32,
    },

    #[error("invalid tile symbol '{symbol}' at ({row}, {col})")]
    InvalidSymbol { symbol: char, row: usize, col: usize },

    #[error("expected {expected} tile symbols, found {found}")]
    TileCount { expected: usize, found: usize },

    #[error("unexpected content after the map: '{0}'")]
    TrailingContent(char),

    #[error("dungeon has neither a door nor an exit")]
    NoWayOut,

    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/// A symbol table could not be loaded or is inconsistent
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read symbol table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed symbol table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("symbol '{symbol}' is assigned to both {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: String,
        second: String,
    },

    #[error("{0} may not be a whitespace character")]
    Whitespace(String),
}
