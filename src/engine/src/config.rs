use std::env;
use std::path::PathBuf;

pub const DEFAULT_RACK_SIZE: usize = 7;
pub const DEFAULT_BINGO_BONUS: u32 = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Word list to load; the bundled list is used when unset.
    pub wordlist_path: Option<PathBuf>,
    pub rack_size: usize,
    /// Awarded when a single move uses a full rack.
    pub bingo_bonus: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist_path: None,
            rack_size: DEFAULT_RACK_SIZE,
            bingo_bonus: DEFAULT_BINGO_BONUS,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("WORDLIST_PATH") {
            let path = path.trim();
            if !path.is_empty() {
                config.wordlist_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(size) = env::var("RACK_SIZE") {
            if let Ok(value) = size.parse::<usize>() {
                if value > 0 {
                    config.rack_size = value;
                }
            }
        }

        if let Ok(bonus) = env::var("BINGO_BONUS") {
            if let Ok(value) = bonus.parse::<u32>() {
                config.bingo_bonus = value;
            }
        }

        config
    }
}
