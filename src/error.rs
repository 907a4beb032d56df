use std::path::PathBuf;

/// Out-of-bounds access on a [`Grid`](crate::core::grid::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid index ({row}, {col}) out of range for {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors returned by the game factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("game not found: {0}")]
    NotFound(String),
}

/// Errors raised while reading or writing the score log.
///
/// The shell never surfaces these to the player; the graceful wrappers on
/// [`ScoreLog`](crate::scores::ScoreLog) log them and carry on.
#[derive(Debug, thiserror::Error)]
pub enum ScoreLogError {
    #[error("failed to read score log {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to append to score log {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised when parsing a Sudoku layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle must have 81 cells, found {0}")]
    BadLength(usize),

    #[error("invalid puzzle character {0:?}")]
    BadCharacter(char),

    #[error("given {value} at ({row}, {col}) repeats in its row, column or box")]
    ConflictingGiven { row: usize, col: usize, value: u8 },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid sudoku puzzle: {0}")]
    Puzzle(#[from] PuzzleError),
}
