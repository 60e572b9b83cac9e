//! Accumulates the words found during a search.

use std::collections::HashSet;

/// Set of dictionary words confirmed present in the grid.
///
/// Adding a word that is already present leaves the collector unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultCollector {
    words: HashSet<String>,
}

impl ResultCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word`, returning true if it was not already present.
    pub fn add(&mut self, word: &str) -> bool {
        if self.words.contains(word) {
            false
        } else {
            self.words.insert(word.to_owned())
        }
    }

    /// Return true if `word` has been recorded.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Return the number of distinct words recorded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Return true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Return a snapshot of every recorded word.
    pub fn all(&self) -> HashSet<String> {
        self.words.clone()
    }

    /// Return the recorded words in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<_> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Move every word out of `other` into this collector.
    pub fn merge(&mut self, other: ResultCollector) {
        self.words.extend(other.words);
    }

    /// Consume the collector, returning the recorded words.
    pub fn into_words(self) -> HashSet<String> {
        self.words
    }
}

impl Extend<String> for ResultCollector {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.words.extend(iter);
    }
}
