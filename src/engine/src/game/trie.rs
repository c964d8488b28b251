#[derive(Debug, PartialEq, Clone, Default)]
pub struct Trie {
    // Vec rather than HashMap: most nodes have only a few children.
    next: Vec<(char, Trie)>,
    finish: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = self;
        for c in word.chars() {
            let index = match node.next.iter().position(|(ch, _)| *ch == c) {
                Some(index) => index,
                None => {
                    node.next.push((c, Trie::new()));
                    node.next.len() - 1
                }
            };
            node = &mut node.next[index].1;
        }
        !std::mem::replace(&mut node.finish, true)
    }

    pub fn search(&self, word: &str) -> bool {
        let mut node = self;
        for c in word.chars() {
            match node.next.iter().find(|(ch, _)| *ch == c) {
                Some((_, child)) => node = child,
                None => return false,
            }
        }
        node.finish
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut result = Trie::new();
        for word in words {
            result.insert(word);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search() {
        let t = Trie::from_iter(["apple", "banana"]);
        assert!(t.search("apple"));
        assert!(t.search("banana"));
        assert!(!t.search("testingtesting123"));

        let t2 = Trie::from_iter(["apple", "app", "application", "applause", "happy"]);
        assert!(!t2.search("abdsas"));
        assert!(t2.search("happy"));
        assert!(t2.search("app"));
        assert!(!t2.search("appl"));
    }

    #[test]
    fn test_empty_word_is_absent() {
        let t = Trie::from_iter(["a", "an"]);
        assert!(!t.search(""));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut t = Trie::new();
        assert!(t.insert("tile"));
        assert!(t.insert("tiles"));
        assert!(!t.insert("tile"));
        assert!(t.search("tile"));
    }

    #[test]
    fn test_from_iter() {
        let wordlist = "apple\nbanana\ncherry\nhappy";
        let t: Trie = wordlist.lines().collect();

        assert!(t.search("apple"));
        assert!(t.search("cherry"));
        assert!(!t.search("grape"));
        assert!(!t.search("sad"));
    }
}
