use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::game::board::{Board, PlacedTile, Position};
use crate::game::directions::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTile {
    pub position: Position,
    pub letter: String,
    /// Placed this turn. Only new tiles pick up square multipliers.
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    pub start_position: Position,
    pub direction: Direction,
    pub tiles: Vec<WordTile>,
    pub score: u32,
}

impl WordInfo {
    pub fn has_new_tile(&self) -> bool {
        self.tiles.iter().any(|t| t.is_new)
    }
}

/// Every maximal run of two or more occupied squares, across or down, that
/// contains at least one of the `placed` tiles. Each run is reported once.
pub fn extract_words(board: &Board, placed: &[PlacedTile]) -> Vec<WordInfo> {
    let new_positions: HashSet<usize> = placed.iter().filter_map(|p| p.position.key()).collect();
    let mut seen: HashSet<(Position, Direction)> = HashSet::new();
    let mut words = Vec::new();

    for p in placed {
        if !p.position.in_bounds() {
            continue;
        }
        for direction in Direction::ALL {
            let Some(word) = find_word(board, p.position, direction, &new_positions) else {
                continue;
            };
            if seen.insert((word.start_position, direction)) {
                words.push(word);
            }
        }
    }

    words.retain(WordInfo::has_new_tile);
    words
}

fn find_word(
    board: &Board,
    from: Position,
    direction: Direction,
    new_positions: &HashSet<usize>,
) -> Option<WordInfo> {
    if !board.is_occupied(from) {
        return None;
    }

    let mut start = from;
    while let Some(prev) = start.offset(direction.back()) {
        if !board.is_occupied(prev) {
            break;
        }
        start = prev;
    }

    let mut tiles = Vec::new();
    let mut cursor = Some(start);
    while let Some(position) = cursor {
        let Some(tile) = board.tile_at(position) else {
            break;
        };
        tiles.push(WordTile {
            position,
            letter: tile.letter.clone(),
            is_new: position
                .key()
                .is_some_and(|key| new_positions.contains(&key)),
        });
        cursor = position.offset(direction.step());
    }

    if tiles.len() < 2 {
        return None;
    }

    Some(WordInfo {
        word: tiles.iter().map(|t| t.letter.as_str()).collect(),
        start_position: start,
        direction,
        tiles,
        score: 0,
    })
}
