pub mod board;
pub mod conversion;
pub mod dictionary;
pub mod directions;
pub mod scoring;
pub mod session;
pub mod tile_bag;
pub mod trie;
pub mod validation;
pub mod words;

pub use board::{Board, Multiplier, PlacedTile, Position, Square, Tile, BOARD_SIZE, CENTER};
pub use dictionary::Dictionary;
pub use directions::Direction;
pub use scoring::score_word;
pub use session::{GameSession, Player};
pub use tile_bag::{letter_value, TileBag};
pub use validation::{ValidationResult, Violation};
pub use words::{extract_words, WordInfo, WordTile};

use tracing::debug;

use crate::config::GameConfig;
use crate::error::Result;
use board::placement;

/// Move validation and scoring. Holds no per-game state, so one engine can
/// serve any number of boards.
#[derive(Debug, Clone)]
pub struct GameEngine {
    dictionary: Dictionary,
    rack_size: usize,
    bingo_bonus: u32,
}

impl GameEngine {
    pub fn new(dictionary: Dictionary, config: &GameConfig) -> Self {
        Self {
            dictionary,
            rack_size: config.rack_size,
            bingo_bonus: config.bingo_bonus,
        }
    }

    /// Loads the configured word list, falling back to the bundled one.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let dictionary = match &config.wordlist_path {
            Some(path) => Dictionary::from_file(path)?,
            None => Dictionary::bundled(),
        };
        Ok(Self::new(dictionary, config))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn rack_size(&self) -> usize {
        self.rack_size
    }

    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.is_valid_word(word)
    }

    /// Judges the tiles in `placed`, which must already be on `board`.
    /// `original` is the board before they went down; without it, `board`
    /// stands in and opening-move and contact checks become unreliable.
    ///
    /// Every check runs and every problem is reported; the only early exits
    /// are an empty move and a move that forms no word at all.
    pub fn validate_move(
        &self,
        board: &Board,
        placed: &[PlacedTile],
        original: Option<&Board>,
    ) -> ValidationResult {
        let original = original.unwrap_or(board);

        if placed.is_empty() {
            return ValidationResult::rejected(&[Violation::NoTilesPlaced]);
        }

        let mut violations = Vec::new();

        if !placement::is_legally_placed(board, placed, original) {
            violations.push(Violation::NotInLine);
        }

        if original.is_opening() {
            if !placement::covers_center(placed) {
                violations.push(Violation::MissesCenter);
            }
        } else if !placement::touches_existing(placed, original) {
            violations.push(Violation::Disconnected);
        }

        let formed = extract_words(board, placed);
        if formed.is_empty() {
            violations.push(Violation::NoWordFormed);
            debug!(?violations, "move forms no word");
            return ValidationResult::rejected(&violations);
        }

        let mut words = Vec::with_capacity(formed.len());
        let mut total_score: u32 = 0;
        for mut word in formed {
            if !self.dictionary.is_valid_word(&word.word) {
                violations.push(Violation::UnknownWord(word.word));
                continue;
            }
            word.score = score_word(&word, board);
            total_score = total_score.saturating_add(word.score);
            words.push(word);
        }

        if placed.len() == self.rack_size {
            total_score = total_score.saturating_add(self.bingo_bonus);
        }

        let is_valid = violations.is_empty() && !words.is_empty();
        debug!(
            is_valid,
            total_score,
            words = words.len(),
            ?violations,
            "validated move of {} tiles",
            placed.len()
        );

        ValidationResult {
            is_valid,
            errors: violations.iter().map(ToString::to_string).collect(),
            words,
            total_score,
        }
    }
}
