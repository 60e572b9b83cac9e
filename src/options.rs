//! Knobs controlling a search.

use crate::grid::Adjacency;

/// Configuration shared by the sequential and parallel searches.
///
/// The default traces paths through all 8 neighbours and explores every start
/// cell.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Which cells may follow each other on a path.
    pub adjacency: Adjacency,

    /// Stop opening new explorations once every dictionary word has been
    /// reported.
    ///
    /// This never changes the result, only the amount of work done.
    pub stop_when_exhausted: bool,
}

impl SearchOptions {
    /// Return these options with `adjacency` replaced.
    pub fn adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Return these options with early exit toggled.
    pub fn stop_when_exhausted(mut self, stop: bool) -> Self {
        self.stop_when_exhausted = stop;
        self
    }
}
