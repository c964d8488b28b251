//! Move validation and scoring for a 15x15 crossword tile game, plus the
//! rack and turn bookkeeping needed to play one.
//!
//! [`game::GameEngine::validate_move`] is the core: given the board with the
//! new tiles on it, the tiles themselves and the board before they were
//! placed, it reports whether the move is legal, which words it forms and
//! what it scores. It never touches its inputs.

pub mod config;
pub mod error;
pub mod game;

#[cfg(test)]
mod test_utils;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameEngine, GameSession, ValidationResult};
