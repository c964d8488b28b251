use phf::phf_map;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_seeder::Seeder;
use serde::{Deserialize, Serialize};

use crate::game::board::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterStats {
    pub count: usize,
    pub value: u32,
}

const fn stats(count: usize, value: u32) -> LetterStats {
    LetterStats { count, value }
}

pub static LETTER_DISTRIBUTION: phf::Map<char, LetterStats> = phf_map! {
    'A' => stats(9, 1),
    'B' => stats(2, 3),
    'C' => stats(2, 3),
    'D' => stats(4, 2),
    'E' => stats(12, 1),
    'F' => stats(2, 4),
    'G' => stats(3, 2),
    'H' => stats(2, 4),
    'I' => stats(9, 1),
    'J' => stats(1, 8),
    'K' => stats(1, 5),
    'L' => stats(4, 1),
    'M' => stats(2, 3),
    'N' => stats(6, 1),
    'O' => stats(8, 1),
    'P' => stats(2, 3),
    'Q' => stats(1, 10),
    'R' => stats(6, 1),
    'S' => stats(4, 1),
    'T' => stats(6, 1),
    'U' => stats(4, 1),
    'V' => stats(2, 4),
    'W' => stats(2, 4),
    'X' => stats(1, 8),
    'Y' => stats(2, 4),
    'Z' => stats(1, 10),
};

pub const BLANK: LetterStats = stats(2, 0);

/// Face value of a letter. Blanks and anything outside A-Z are worth nothing.
pub fn letter_value(letter: char) -> u32 {
    LETTER_DISTRIBUTION
        .get(&letter.to_ascii_uppercase())
        .map_or(0, |stats| stats.value)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// The full set in alphabetical order, blanks last.
    pub fn standard() -> Self {
        let mut letters: Vec<(&char, &LetterStats)> = LETTER_DISTRIBUTION.entries().collect();
        letters.sort_by_key(|(letter, _)| **letter);

        let mut tiles = Vec::new();
        let mut next_id = 0;
        let mut push = |letter: String, stats: &LetterStats| {
            for _ in 0..stats.count {
                tiles.push(Tile::new(format!("tile-{next_id}"), letter.clone(), stats.value));
                next_id += 1;
            }
        };
        for (letter, stats) in letters {
            push(letter.to_string(), stats);
        }
        push(String::new(), &BLANK);

        Self { tiles }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bag = Self::standard();
        bag.tiles.shuffle(rng);
        bag
    }

    /// Same seed, same draw order.
    pub fn seeded(seed: &str) -> Self {
        let mut rng = StdRng::from_seed(Seeder::from(seed).make_seed());
        Self::shuffled(&mut rng)
    }

    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Takes up to `count` tiles off the top of the bag.
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        let count = count.min(self.tiles.len());
        self.tiles.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
