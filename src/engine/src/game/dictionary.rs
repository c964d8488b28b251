use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use once_cell::sync::Lazy;
use tracing::info;

use crate::error::{GameError, Result};
use crate::game::trie::Trie;

static BUNDLED_WORDS: &str = include_str!("../../wordlist");

static BUNDLED: Lazy<Dictionary> = Lazy::new(|| Dictionary::from_text(BUNDLED_WORDS));

/// Case-insensitive word list. Immutable once built and cheap to clone.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Arc<Trie>,
    len: usize,
}

impl Dictionary {
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut trie = Trie::new();
        let mut len = 0;
        for word in words {
            let word = word.trim();
            if !word.is_empty() && trie.insert(&word.to_uppercase()) {
                len += 1;
            }
        }
        Self {
            words: Arc::new(trie),
            len,
        }
    }

    /// One word per line.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let to_error = |source| GameError::WordList {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(to_error)?;

        let dictionary = Self::from_words(lines.iter().map(String::as_str));
        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// The word list shipped with the crate, built on first use.
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }

    pub fn is_valid_word(&self, word: &str) -> bool {
        !word.is_empty() && self.words.search(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
