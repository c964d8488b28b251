use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::words::WordInfo;

/// Why a pending move cannot be played. The display text is what players see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("No tiles were placed")]
    NoTilesPlaced,

    #[error("Tiles must be placed in a straight line and form a connected word")]
    NotInLine,

    #[error("First word must cross the center star")]
    MissesCenter,

    #[error("New tiles must connect to existing words on the board")]
    Disconnected,

    #[error("No words were formed by this move.")]
    NoWordFormed,

    #[error("\"{0}\" is not a valid word")]
    UnknownWord(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Every problem found, in the order the checks ran.
    pub errors: Vec<String>,
    /// Accepted words only, each carrying its score.
    pub words: Vec<WordInfo>,
    pub total_score: u32,
}

impl ValidationResult {
    pub(crate) fn rejected(violations: &[Violation]) -> Self {
        Self {
            is_valid: false,
            errors: violations.iter().map(ToString::to_string).collect(),
            words: Vec::new(),
            total_score: 0,
        }
    }

    /// Accepted words joined for display, e.g. `CAT, AT`.
    pub fn word_list(&self) -> String {
        self.words
            .iter()
            .map(|w| w.word.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// All errors on one line.
    pub fn error_message(&self) -> String {
        self.errors.join(", ")
    }
}
