//! A prefix trie over the dictionary, shared by every exploration of a single
//! search.
//!
//! The shape of the trie is fixed once [`PrefixIndex::build`] returns. The only
//! state that changes afterwards is the per-word "not yet reported" marker,
//! which is cleared by [`PrefixIndex::consume_terminal`] the first time a word
//! is found. Clearing a marker never removes the node or its children, so
//! longer words that share the prefix stay findable.

use std::{
    collections::{hash_map::Entry, HashMap},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// A node of the trie, representing the prefix spelled by the letters on the
/// path from the root.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    word: Option<Box<str>>,
    unreported: AtomicBool,
}

impl TrieNode {
    /// Return the child reached by appending `letter` to this prefix.
    #[inline]
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Return an iterator over the outgoing edges of this node.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(letter, node)| (*letter, node))
    }

    /// Return the dictionary word ending at this node, whether or not it has
    /// been reported yet.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Return the dictionary word ending at this node if it has not been
    /// reported yet.
    pub fn terminal(&self) -> Option<&str> {
        self.word
            .as_deref()
            .filter(|_| self.unreported.load(Ordering::Acquire))
    }

    /// Return true if no word extends this prefix.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Trie built once from a dictionary.
#[derive(Debug)]
pub struct PrefixIndex {
    root: TrieNode,
    num_words: usize,
    num_nodes: usize,
    remaining: AtomicUsize,
}

impl PrefixIndex {
    /// Build an index containing every non-empty word.
    ///
    /// Duplicate words are collapsed and empty words are skipped.
    pub fn build<W: AsRef<str>>(words: impl IntoIterator<Item = W>) -> Self {
        let mut index = PrefixIndex {
            root: TrieNode::default(),
            num_words: 0,
            num_nodes: 1,
            remaining: AtomicUsize::new(0),
        };
        let mut skipped = 0;

        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                skipped += 1;
            } else {
                index.insert(word);
            }
        }

        log::debug!(
            "Built prefix index with [{}] words over [{}] nodes, skipped [{}] empty entries.",
            index.num_words,
            index.num_nodes,
            skipped
        );

        index
    }

    fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for letter in word.chars() {
            node = match node.children.entry(letter) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    self.num_nodes += 1;
                    entry.insert(TrieNode::default())
                }
            };
        }

        if node.word.is_some() {
            return false;
        }

        node.word = Some(word.into());
        *node.unreported.get_mut() = true;
        self.num_words += 1;
        *self.remaining.get_mut() += 1;

        true
    }

    /// Return the node for the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Return the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.num_words
    }

    /// Return true if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    /// Return the number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.num_nodes
    }

    /// Return the number of words that have not been reported yet.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Return the node for `prefix`, if any dictionary word starts with it.
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    /// Return true if `word` is a dictionary entry.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).map_or(false, |node| node.word.is_some())
    }

    /// Return every word in the index, in no particular order.
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::with_capacity(self.num_words);
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            words.extend(node.word());
            stack.extend(node.children.values());
        }

        words
    }

    /// Clear the "not yet reported" marker on `node`.
    ///
    /// Returns the word only to the single caller that actually cleared the
    /// marker, so concurrent discoveries of the same word report it at most
    /// once. Returns `None` if `node` is not terminal or was already consumed.
    ///
    /// `node` must belong to this index.
    pub fn consume_terminal<'n>(&self, node: &'n TrieNode) -> Option<&'n str> {
        let word = node.word.as_deref()?;

        node.unreported
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.remaining.fetch_sub(1, Ordering::AcqRel);

        Some(word)
    }

    /// Restore every terminal marker, so the index can serve another
    /// independent search.
    pub fn reset(&mut self) {
        let mut stack = vec![&mut self.root];

        while let Some(node) = stack.pop() {
            *node.unreported.get_mut() = node.word.is_some();
            stack.extend(node.children.values_mut());
        }

        *self.remaining.get_mut() = self.num_words;
    }
}

impl<W: AsRef<str>> FromIterator<W> for PrefixIndex {
    fn from_iter<T: IntoIterator<Item = W>>(iter: T) -> Self {
        PrefixIndex::build(iter)
    }
}
