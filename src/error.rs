//! Error types for board construction, moves and coordinate parsing

use std::path::PathBuf;

/// Invalid game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("row count must be between 1 and 26, got {0}")]
    Rows(u8),

    #[error("column count must be between 1 and 26, got {0}")]
    Cols(u8),

    #[error("win length must be between 1 and {max}, got {win_len}")]
    WinLength { win_len: u8, max: u8 },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// A move that cannot be applied.
///
/// A rejected move never changes the board, the frontiers or the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("the game is over")]
    GameOver,

    #[error("it is not the human player's turn")]
    NotYourTurn,
}

/// Malformed coordinate or board-size text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected a column letter followed by a row number, got {0:?}")]
    Malformed(String),

    #[error("{0} is not on a {1}x{2} board")]
    OffBoard(String, u8, u8),

    #[error("expected a size of the form RxC, got {0:?}")]
    Size(String),
}

/// Failure while running the terminal game.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
