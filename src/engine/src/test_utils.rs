#[cfg(test)]
pub mod test_utils {
    use crate::config::GameConfig;
    use crate::game::{
        letter_value, Board, Dictionary, Direction, GameEngine, PlacedTile, Position, Tile,
    };

    /// Words the engine tests rely on.
    pub const TEST_WORDS: &[&str] = &[
        "aa", "at", "ax", "co", "ox", "za", "cat", "cats", "dog", "dogs", "oat", "oats",
        "quiz", "quizzed", "toast", "tile", "tiles", "rack", "board",
    ];

    /// A tile carrying its standard face value.
    pub fn tile(letter: char) -> Tile {
        Tile::new(
            format!("test-{letter}"),
            letter.to_string(),
            letter_value(letter),
        )
    }

    pub fn placed_at(letter: char, row: usize, col: usize) -> PlacedTile {
        PlacedTile::new(tile(letter), Position::new(row, col))
    }

    /// One tile per letter, laid out from `start` along `direction`.
    pub fn placed_word(word: &str, start: Position, direction: Direction) -> Vec<PlacedTile> {
        let (dr, dc) = direction.step();
        word.chars()
            .enumerate()
            .map(|(i, letter)| {
                let row = start.row as isize + dr * i as isize;
                let col = start.col as isize + dc * i as isize;
                placed_at(letter, row as usize, col as usize)
            })
            .collect()
    }

    /// An otherwise empty board with `word` already committed.
    pub fn board_with_word(word: &str, start: Position, direction: Direction) -> Board {
        Board::new().with_tiles(&placed_word(word, start, direction))
    }

    pub fn create_test_dictionary() -> Dictionary {
        Dictionary::from_words(TEST_WORDS.iter().copied())
    }

    pub fn create_test_engine() -> GameEngine {
        GameEngine::new(create_test_dictionary(), &GameConfig::default())
    }
}
