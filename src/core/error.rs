//! Error types for level loading and the surrounding tooling.

use thiserror::Error;

/// Main error type for the puzzle engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed level data, fatal to that load attempt
    #[error("Invalid level: {0}")]
    InvalidLevel(#[from] InvalidLevel),

    /// IO errors while reading level or config files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config parsing and snapshot export
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad configuration or command line values
    #[error("Config error: {0}")]
    Config(String),
}

/// Why a level was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidLevel {
    #[error("level has no rows")]
    NoRows,

    #[error("no player start cell")]
    NoPlayer,

    #[error("{0} player start cells, expected exactly one")]
    MultiplePlayers(usize),

    #[error("unknown symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol { symbol: char, row: usize, column: usize },
}

/// Result type alias using the engine's Error type.
pub type Result<T> = std::result::Result<T, Error>;
