use super::{Multiplier, BOARD_SIZE, CENTER};

#[rustfmt::skip]
pub const TRIPLE_WORD: [(usize, usize); 8] = [
    (0, 0), (0, 7), (0, 14),
    (7, 0), (7, 14),
    (14, 0), (14, 7), (14, 14),
];

// (7, 7) is listed here as well, but the center takes precedence.
#[rustfmt::skip]
pub const DOUBLE_WORD: [(usize, usize); 17] = [
    (1, 1), (1, 13), (2, 2), (2, 12), (3, 3), (3, 11),
    (4, 4), (4, 10), (7, 7), (10, 4), (10, 10),
    (11, 3), (11, 11), (12, 2), (12, 12), (13, 1), (13, 13),
];

#[rustfmt::skip]
pub const TRIPLE_LETTER: [(usize, usize); 12] = [
    (1, 5), (1, 9), (5, 1), (5, 5), (5, 9), (5, 13),
    (9, 1), (9, 5), (9, 9), (9, 13), (13, 5), (13, 9),
];

#[rustfmt::skip]
pub const DOUBLE_LETTER: [(usize, usize); 24] = [
    (0, 3), (0, 11), (2, 6), (2, 8), (3, 0), (3, 7), (3, 14),
    (6, 2), (6, 6), (6, 8), (6, 12), (7, 3), (7, 11),
    (8, 2), (8, 6), (8, 8), (8, 12), (11, 0), (11, 7), (11, 14),
    (12, 6), (12, 8), (14, 3), (14, 11),
];

/// Premium square for a coordinate in the standard layout.
pub fn multiplier_at(row: usize, col: usize) -> Multiplier {
    let square = (row, col);
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        Multiplier::Normal
    } else if square == (CENTER.row, CENTER.col) {
        Multiplier::Center
    } else if TRIPLE_WORD.contains(&square) {
        Multiplier::TripleWord
    } else if DOUBLE_WORD.contains(&square) {
        Multiplier::DoubleWord
    } else if TRIPLE_LETTER.contains(&square) {
        Multiplier::TripleLetter
    } else if DOUBLE_LETTER.contains(&square) {
        Multiplier::DoubleLetter
    } else {
        Multiplier::Normal
    }
}
