use crate::game::board::Board;
use crate::game::words::WordInfo;

/// Points for one word: sum of letter scores times the product of word
/// multipliers. Premium squares only count under tiles placed this turn.
pub fn score_word(word: &WordInfo, board: &Board) -> u32 {
    let mut sum: u32 = 0;
    let mut word_multiplier: u32 = 1;

    for word_tile in &word.tiles {
        let Some(square) = board.square(word_tile.position) else {
            continue;
        };
        let value = square.tile.as_ref().map_or(0, |tile| tile.value);

        if word_tile.is_new {
            sum = value
                .saturating_mul(square.multiplier.letter_factor())
                .saturating_add(sum);
            word_multiplier = square.multiplier.word_factor().saturating_mul(word_multiplier);
        } else {
            sum = sum.saturating_add(value);
        }
    }

    sum.saturating_mul(word_multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{Multiplier, PlacedTile, Position, Tile, CENTER};
    use crate::game::words::extract_words;
    use crate::game::Direction;
    use crate::test_utils::test_utils::{board_with_word, placed_at, placed_word};

    fn score_only_word(board: &Board, placed: &[PlacedTile]) -> u32 {
        let words = extract_words(board, placed);
        assert_eq!(words.len(), 1, "expected exactly one word");
        score_word(&words[0], board)
    }

    #[test]
    fn test_plain_squares() {
        // Row 7, columns 4..=6 are all normal squares.
        let placed = placed_word("CAT", Position::new(7, 4), Direction::Horizontal);
        let board = Board::new().with_tiles(&placed);
        assert_eq!(score_only_word(&board, &placed), 3 + 1 + 1);
    }

    #[test]
    fn test_center_doubles_word() {
        let placed = placed_word("CAT", Position::new(7, 6), Direction::Horizontal);
        let board = Board::new().with_tiles(&placed);
        assert_eq!(score_only_word(&board, &placed), (3 + 1 + 1) * 2);
    }

    #[test]
    fn test_triple_letter() {
        // (1, 5) is a triple letter square.
        let placed = placed_word("CAT", Position::new(1, 5), Direction::Horizontal);
        let board = Board::new().with_tiles(&placed);
        assert_eq!(score_only_word(&board, &placed), 3 * 3 + 1 + 1);
    }

    #[test]
    fn test_triple_letter_inside_double_word() {
        // No standard line puts a triple letter within three squares of a
        // double word, so mark one by hand.
        let placed = placed_word("CAT", Position::new(5, 9), Direction::Horizontal);
        let mut board = Board::new().with_tiles(&placed);
        board.rows[5].squares[11].multiplier = Multiplier::DoubleWord;
        assert_eq!(score_only_word(&board, &placed), ((3 * 3) + 1 + 1) * 2);
    }

    #[test]
    fn test_word_multipliers_compound() {
        // (0, 0) and (0, 7) are triple word, (0, 3) doubles the O.
        let placed = placed_word("ABSOLUTE", Position::new(0, 0), Direction::Horizontal);
        let board = Board::new().with_tiles(&placed);
        let letters = 1 + 3 + 1 + 2 + 1 + 1 + 1 + 1;
        assert_eq!(score_only_word(&board, &placed), letters * 3 * 3);
    }

    #[test]
    fn test_existing_tiles_skip_premiums() {
        // CAT through the center, then S appended: the center no longer counts.
        let original = board_with_word("CAT", CENTER, Direction::Horizontal);
        let placed = vec![placed_at('S', 7, 10)];
        let board = original.with_tiles(&placed);
        assert_eq!(score_only_word(&board, &placed), 3 + 1 + 1 + 1);
    }

    #[test]
    fn test_blank_scores_zero() {
        let placed = vec![
            PlacedTile::new(Tile::new("blank-1", "", 0), Position::new(7, 4)),
            placed_at('X', 7, 5),
        ];
        let board = Board::new().with_tiles(&placed);
        assert_eq!(score_only_word(&board, &placed), 8);
    }

    #[test]
    fn test_huge_tile_values_saturate() {
        let placed = vec![
            placed_at('C', 7, 6),
            PlacedTile::new(Tile::new("heavy", "A", u32::MAX), CENTER),
            placed_at('T', 7, 8),
        ];
        let board = Board::new().with_tiles(&placed);
        assert_eq!(score_only_word(&board, &placed), u32::MAX);
    }

    #[test]
    fn test_scoring_is_pure() {
        let placed = placed_word("QUIZ", Position::new(7, 7), Direction::Vertical);
        let board = Board::new().with_tiles(&placed);
        let words = extract_words(&board, &placed);
        let first = score_word(&words[0], &board);
        for _ in 0..5 {
            assert_eq!(score_word(&words[0], &board), first);
        }
    }
}
