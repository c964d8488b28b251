use std::path::PathBuf;

use thiserror::Error;

use crate::game::board::Position;

/// Operational failures. Illegal moves are not errors: they are reported as
/// violations inside a [`crate::game::ValidationResult`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("position ({}, {}) is outside the board", .0.row, .0.col)]
    OutOfBounds(Position),

    #[error("square ({}, {}) is already occupied", .0.row, .0.col)]
    SquareOccupied(Position),

    #[error("no tile was placed at ({}, {}) this turn", .0.row, .0.col)]
    NotPending(Position),

    #[error("tile {0} is not in the current player's rack")]
    TileNotInRack(String),

    #[error("a game needs between 2 and 4 players, got {0}")]
    PlayerCount(usize),

    #[error("player names must not be empty")]
    EmptyPlayerName,

    #[error("player index {0} is not in the game")]
    CurrentPlayer(usize),

    #[error("the game is over")]
    GameOver,

    #[error("invalid saved game: {0}")]
    SavedGame(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
