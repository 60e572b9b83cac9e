//! Backtracking search that walks the grid and the prefix trie in lockstep.
//!
//! Every start cell whose letter begins some dictionary word opens one
//! exploration. An exploration only steps onto a neighbouring cell when the
//! trie has an edge for that cell's letter, so a single traversal answers for
//! every word at once and never descends past the longest prefix that the
//! dictionary actually contains.

use crate::{
    collector::ResultCollector,
    grid::{Grid, Position},
    options::SearchOptions,
    prefix_index::{PrefixIndex, TrieNode},
    visited::VisitedMask,
};
use core::ops::{Add, AddAssign};
use std::collections::HashSet;

/// Counters describing how much work a search did.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of start cells that opened an exploration.
    pub explorations: usize,
    /// Number of times any cell was entered, across all paths.
    pub cells_entered: usize,
    /// Number of words reported.
    pub words_found: usize,
}

impl Add for SearchStats {
    type Output = SearchStats;

    fn add(mut self, rhs: SearchStats) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: SearchStats) {
        self.explorations += rhs.explorations;
        self.cells_entered += rhs.cells_entered;
        self.words_found += rhs.words_found;
    }
}

/// Depth-first search over a [`Grid`] guided by a [`PrefixIndex`].
///
/// The explorer consumes the index's terminal markers as words are found, so
/// running a second search against the same index reports nothing new until
/// [`PrefixIndex::reset`] is called.
#[derive(Debug)]
pub struct PathExplorer<'g, 'i> {
    grid: &'g Grid,
    index: &'i PrefixIndex,
    options: SearchOptions,
    stats: SearchStats,
}

impl<'g, 'i> PathExplorer<'g, 'i> {
    /// Create an explorer using the default [`SearchOptions`].
    pub fn new(grid: &'g Grid, index: &'i PrefixIndex) -> Self {
        Self::with_options(grid, index, SearchOptions::default())
    }

    /// Create an explorer with the given options.
    pub fn with_options(grid: &'g Grid, index: &'i PrefixIndex, options: SearchOptions) -> Self {
        PathExplorer {
            grid,
            index,
            options,
            stats: SearchStats::default(),
        }
    }

    /// Return the counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find every dictionary word that can be traced through the grid.
    pub fn search(&mut self) -> HashSet<String> {
        let mut collector = ResultCollector::new();
        self.search_into(&mut collector);
        collector.into_words()
    }

    /// Run the search, recording found words into `collector`.
    pub fn search_into(&mut self, collector: &mut ResultCollector) {
        let mut mask = VisitedMask::new(self.grid);

        for start in self.grid.positions() {
            if self.is_exhausted() {
                log::debug!(
                    "Every word reported, skipping start cells from [{:?}].",
                    start
                );
                break;
            }

            self.explore_from(start, &mut mask, collector);
        }

        debug_assert!(mask.is_clear(), "search leaked marks in the visited mask");

        log::debug!(
            "Searched [{}x{}] grid: [{}] explorations, [{}] cells entered, [{}] words found.",
            self.grid.rows(),
            self.grid.columns(),
            self.stats.explorations,
            self.stats.cells_entered,
            self.stats.words_found
        );
    }

    /// Open an exploration rooted at `start`.
    ///
    /// Returns false without touching `mask` when no dictionary word begins
    /// with the letter at `start`. `mask` must be clear on entry and is clear
    /// again when this returns.
    pub fn explore_from(
        &mut self,
        start: Position,
        mask: &mut VisitedMask,
        collector: &mut ResultCollector,
    ) -> bool {
        if self.is_exhausted() {
            return false;
        }

        let (grid, index) = (self.grid, self.index);
        match index.root().child(grid[start]) {
            Some(node) => {
                log::trace!("Exploring from [{:?}].", start);

                self.stats.explorations += 1;
                self.explore(start, node, mask, collector);
                true
            }
            None => false,
        }
    }

    fn explore(
        &mut self,
        position: Position,
        node: &TrieNode,
        mask: &mut VisitedMask,
        collector: &mut ResultCollector,
    ) {
        // Released on every exit from this frame.
        let mut mask = mask.mark(position);
        self.stats.cells_entered += 1;

        if let Some(word) = self.index.consume_terminal(node) {
            collector.add(word);
            self.stats.words_found += 1;
        }

        if node.is_leaf() {
            return;
        }

        let grid = self.grid;
        for neighbour in grid.neighbours(position, self.options.adjacency) {
            if self.is_exhausted() {
                return;
            }

            if mask.is_visited(neighbour) {
                continue;
            }

            if let Some(child) = node.child(grid[neighbour]) {
                self.explore(neighbour, child, &mut mask, collector);
            }
        }
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.options.stop_when_exhausted && self.index.remaining() == 0
    }
}
