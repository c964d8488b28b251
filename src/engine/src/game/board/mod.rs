use core::fmt;

use serde::{Deserialize, Serialize};

pub mod layout;
pub mod placement;

pub const BOARD_SIZE: usize = 15;
pub const CENTER: Position = Position { row: 7, col: 7 };

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    /// Upper-case letter, or empty for a blank.
    pub letter: String,
    pub value: u32,
}

impl Tile {
    pub fn new(id: impl Into<String>, letter: impl Into<String>, value: u32) -> Self {
        Self {
            id: id.into(),
            letter: letter.into(),
            value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.letter.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Dense integer encoding used for set membership. `None` off the board.
    pub fn key(&self) -> Option<usize> {
        self.in_bounds().then(|| self.row * BOARD_SIZE + self.col)
    }

    pub fn offset(&self, (dr, dc): (isize, isize)) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Position { row, col };
        next.in_bounds().then_some(next)
    }

    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        crate::game::directions::ORTHOGONAL
            .into_iter()
            .filter_map(move |step| self.offset(step))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Multiplier {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// Scores as a double word; marks where the opening move must go.
    Center,
}

impl Multiplier {
    pub fn letter_factor(self) -> u32 {
        match self {
            Multiplier::DoubleLetter => 2,
            Multiplier::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_factor(self) -> u32 {
        match self {
            Multiplier::DoubleWord | Multiplier::Center => 2,
            Multiplier::TripleWord => 3,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub tile: Option<Tile>,
    pub multiplier: Multiplier,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub squares: Vec<Square>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub rows: Vec<Row>,
}

/// A tile set down during the pending move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub tile: Tile,
    pub position: Position,
}

impl PlacedTile {
    pub fn new(tile: Tile, position: Position) -> Self {
        Self { tile, position }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with the standard premium layout.
    pub fn new() -> Self {
        Self {
            rows: (0..BOARD_SIZE)
                .map(|row| Row {
                    squares: (0..BOARD_SIZE)
                        .map(|col| Square {
                            tile: None,
                            multiplier: layout::multiplier_at(row, col),
                            row,
                            col,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn square(&self, position: Position) -> Option<&Square> {
        self.rows.get(position.row)?.squares.get(position.col)
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.square(position)?.tile.as_ref()
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.tile_at(position).is_some()
    }

    /// Puts `tile` on the square, returning whatever was there. Positions
    /// off the board are ignored.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> Option<Tile> {
        let square = self
            .rows
            .get_mut(position.row)?
            .squares
            .get_mut(position.col)?;
        square.tile.replace(tile)
    }

    pub fn remove_tile(&mut self, position: Position) -> Option<Tile> {
        self.rows
            .get_mut(position.row)?
            .squares
            .get_mut(position.col)?
            .tile
            .take()
    }

    /// A new snapshot with `placed` laid on top of this one.
    pub fn with_tiles(&self, placed: &[PlacedTile]) -> Board {
        let mut board = self.clone();
        for p in placed {
            board.set_tile(p.position, p.tile.clone());
        }
        board
    }

    /// The opening move has not been played while the center is empty.
    pub fn is_opening(&self) -> bool {
        !self.is_occupied(CENTER)
    }

    pub fn is_empty(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.squares.iter().all(|square| square.tile.is_none()))
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.rows.iter().flat_map(|row| {
            row.squares.iter().filter_map(|square| {
                square
                    .tile
                    .as_ref()
                    .map(|tile| (Position::new(square.row, square.col), tile))
            })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for square in &row.squares {
                match &square.tile {
                    Some(tile) if tile.is_blank() => write!(f, " ? ")?,
                    Some(tile) => write!(f, " {} ", tile.letter.to_uppercase())?,
                    None => match square.multiplier {
                        Multiplier::Center => write!(f, " * ")?,
                        _ => write!(f, " . ")?,
                    },
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
