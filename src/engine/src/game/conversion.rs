use serde::{Deserialize, Serialize};

use crate::game::board::{Board, Position, Tile};

/// Occupied squares only; premium squares come from the fixed layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableBoard {
    pub tiles: Vec<SerializableTile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableTile {
    pub id: String,
    pub letter: String,
    pub value: u32,
    pub row: usize,
    pub col: usize,
}

impl From<&Board> for SerializableBoard {
    fn from(board: &Board) -> Self {
        Self {
            tiles: board
                .occupied()
                .map(|(position, tile)| SerializableTile {
                    id: tile.id.clone(),
                    letter: tile.letter.clone(),
                    value: tile.value,
                    row: position.row,
                    col: position.col,
                })
                .collect(),
        }
    }
}

// Entries off the board are dropped.
impl From<SerializableBoard> for Board {
    fn from(saved: SerializableBoard) -> Self {
        let mut board = Board::new();
        for t in saved.tiles {
            board.set_tile(Position::new(t.row, t.col), Tile::new(t.id, t.letter, t.value));
        }
        board
    }
}
