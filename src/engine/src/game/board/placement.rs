use std::collections::HashSet;

use super::{Board, PlacedTile, Position, CENTER};

/// Geometry check for a pending move.
///
/// A single tile must either open the game on the center square or sit next
/// to a tile that was already on `original`. Several tiles must share a row
/// or a column and leave no empty square on `board` between the outermost
/// two; tiles already on the board may fill the gaps.
///
/// Multi-tile moves are not checked for contact with existing tiles here.
/// The move validator does that separately against `original`.
pub fn is_legally_placed(board: &Board, placed: &[PlacedTile], original: &Board) -> bool {
    if placed.is_empty() || placed.iter().any(|p| !p.position.in_bounds()) {
        return false;
    }

    let new_positions: HashSet<usize> = placed.iter().filter_map(|p| p.position.key()).collect();
    if new_positions.len() != placed.len() {
        return false;
    }

    if let [single] = placed {
        let position = single.position;
        if original.is_opening() {
            return position == CENTER;
        }
        return position
            .neighbours()
            .any(|n| {
                original.is_occupied(n) && !n.key().is_some_and(|k| new_positions.contains(&k))
            });
    }

    let first = placed[0].position;
    let same_row = placed.iter().all(|p| p.position.row == first.row);
    let same_col = placed.iter().all(|p| p.position.col == first.col);

    if same_row {
        let (lo, hi) = span(placed.iter().map(|p| p.position.col));
        (lo..=hi).all(|col| board.is_occupied(Position::new(first.row, col)))
    } else if same_col {
        let (lo, hi) = span(placed.iter().map(|p| p.position.row));
        (lo..=hi).all(|row| board.is_occupied(Position::new(row, first.col)))
    } else {
        false
    }
}

/// True when any placed tile is orthogonally next to a tile on `original`.
pub fn touches_existing(placed: &[PlacedTile], original: &Board) -> bool {
    placed
        .iter()
        .any(|p| p.position.neighbours().any(|n| original.is_occupied(n)))
}

pub fn covers_center(placed: &[PlacedTile]) -> bool {
    placed.iter().any(|p| p.position == CENTER)
}

fn span(coords: impl Iterator<Item = usize>) -> (usize, usize) {
    coords.fold((usize::MAX, 0), |(lo, hi), c| (lo.min(c), hi.max(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crate::test_utils::test_utils::{board_with_word, placed_at, placed_word};

    #[test]
    fn test_single_tile_opening_on_center() {
        let original = Board::new();
        let placed = vec![placed_at('A', 7, 7)];
        let board = original.with_tiles(&placed);
        assert!(is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_single_tile_opening_off_center() {
        let original = Board::new();
        let placed = vec![placed_at('A', 7, 8)];
        let board = original.with_tiles(&placed);
        assert!(!is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_single_tile_next_to_existing() {
        let original = board_with_word("CAT", CENTER, Direction::Horizontal);
        let placed = vec![placed_at('S', 7, 10)];
        let board = original.with_tiles(&placed);
        assert!(is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_single_tile_floating() {
        let original = board_with_word("CAT", CENTER, Direction::Horizontal);
        let placed = vec![placed_at('S', 3, 3)];
        let board = original.with_tiles(&placed);
        assert!(!is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_single_tile_ignores_itself_on_baked_board() {
        // Caller passed the post-move board as the original.
        let base = board_with_word("CAT", CENTER, Direction::Horizontal);
        let placed = vec![placed_at('S', 3, 3)];
        let board = base.with_tiles(&placed);
        assert!(!is_legally_placed(&board, &placed, &board));
    }

    #[test]
    fn test_horizontal_line() {
        let original = Board::new();
        let placed = placed_word("CAT", Position::new(7, 6), Direction::Horizontal);
        let board = original.with_tiles(&placed);
        assert!(is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_vertical_line() {
        let original = Board::new();
        let placed = placed_word("CAT", Position::new(5, 7), Direction::Vertical);
        let board = original.with_tiles(&placed);
        assert!(is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_diagonal_is_rejected() {
        let original = Board::new();
        let placed = vec![placed_at('A', 7, 7), placed_at('T', 8, 8)];
        let board = original.with_tiles(&placed);
        assert!(!is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_gap_is_rejected() {
        let original = Board::new();
        let placed = vec![placed_at('A', 7, 3), placed_at('T', 7, 5)];
        let board = original.with_tiles(&placed);
        assert!(!is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_gap_filled_by_existing_tile() {
        // C A T down column 7 from row 6; play S . P across row 7 through the A.
        let original = board_with_word("CAT", Position::new(6, 7), Direction::Vertical);
        let placed = vec![placed_at('S', 7, 6), placed_at('P', 7, 8)];
        let board = original.with_tiles(&placed);
        assert!(is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let original = Board::new();
        let placed = vec![placed_at('A', 7, 7), placed_at('T', 7, 15)];
        let board = original.with_tiles(&placed);
        assert!(!is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_huge_coordinates_are_rejected() {
        let original = board_with_word("CAT", CENTER, Direction::Horizontal);
        let placed = vec![placed_at('S', usize::MAX, 3)];
        let board = original.with_tiles(&placed);
        assert!(!is_legally_placed(&board, &placed, &original));
        assert!(!touches_existing(&placed, &original));
    }

    #[test]
    fn test_duplicate_positions_are_rejected() {
        let original = Board::new();
        let placed = vec![placed_at('A', 7, 7), placed_at('T', 7, 7)];
        let board = original.with_tiles(&placed);
        assert!(!is_legally_placed(&board, &placed, &original));
    }

    #[test]
    fn test_touches_existing_and_center() {
        let original = board_with_word("CAT", CENTER, Direction::Horizontal);
        assert!(touches_existing(&[placed_at('S', 8, 9)], &original));
        assert!(!touches_existing(&[placed_at('S', 9, 9)], &original));
        assert!(covers_center(&[placed_at('S', 9, 9), placed_at('A', 7, 7)]));
        assert!(!covers_center(&[placed_at('S', 9, 9)]));
    }
}
