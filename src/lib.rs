#![deny(missing_docs)]

//! Find every dictionary word that can be traced through a grid of letters,
//! moving between neighbouring cells and never reusing a cell within one word
//! (the puzzle popularised by [Boggle](https://en.wikipedia.org/wiki/Boggle)).
//!
//! Instead of searching the grid once per word, the whole dictionary is
//! compiled into a [`PrefixIndex`] (a [trie](https://en.wikipedia.org/wiki/Trie))
//! and a single backtracking traversal, the [`PathExplorer`], follows grid
//! adjacency and trie edges in lockstep. Any branch whose prefix no dictionary
//! word shares is abandoned immediately.
//!
//! ```
//! use grid_word_search::{find_words, Grid};
//!
//! let grid: Grid = "oaan\netae\nihkr\niflv".parse()?;
//! let mut found: Vec<_> = find_words(&grid, ["oath", "pea", "eat", "rain"])
//!     .into_iter()
//!     .collect();
//! found.sort();
//!
//! assert_eq!(found, ["eat", "oath"]);
//! # Ok::<(), grid_word_search::Error>(())
//! ```

pub mod collector;
pub mod error;
pub mod explorer;
pub mod grid;
pub mod naive;
pub mod options;
pub mod parallel;
pub mod prefix_index;
pub mod visited;

pub use collector::ResultCollector;
pub use error::{Error, Result};
pub use explorer::{PathExplorer, SearchStats};
pub use grid::{Adjacency, Grid, Position};
pub use options::SearchOptions;
pub use prefix_index::{PrefixIndex, TrieNode};
pub use visited::VisitedMask;

use std::collections::HashSet;

/// Return every word from `words` that can be traced through `grid` along
/// 8-connected paths of distinct cells.
///
/// This builds a fresh [`PrefixIndex`] and runs one sequential
/// [`PathExplorer`] search with default [`SearchOptions`].
pub fn find_words<W: AsRef<str>>(
    grid: &Grid,
    words: impl IntoIterator<Item = W>,
) -> HashSet<String> {
    let index = PrefixIndex::build(words);
    PathExplorer::new(grid, &index).search()
}
