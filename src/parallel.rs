//! Search that explores independent start cells on the `rayon` thread pool.
//!
//! Each worker owns its own [`VisitedMask`] and [`ResultCollector`], so marks
//! on one path are never observed by another. The only shared mutable state is
//! the index's terminal markers, which are consumed with an atomic
//! compare-and-clear, so a word discovered concurrently from two start cells is
//! still reported once.

use crate::{
    collector::ResultCollector,
    explorer::{PathExplorer, SearchStats},
    grid::{Grid, Position},
    options::SearchOptions,
    prefix_index::PrefixIndex,
    visited::VisitedMask,
};
use rayon::prelude::*;
use std::collections::HashSet;

/// Find every dictionary word in `grid`, exploring start cells in parallel.
///
/// Produces the same set as [`PathExplorer::search`].
pub fn search(grid: &Grid, index: &PrefixIndex, options: SearchOptions) -> HashSet<String> {
    search_with_stats(grid, index, options).0
}

/// Like [`search`], also returning the summed counters of every worker.
pub fn search_with_stats(
    grid: &Grid,
    index: &PrefixIndex,
    options: SearchOptions,
) -> (HashSet<String>, SearchStats) {
    let starts: Vec<Position> = grid.positions().collect();

    let (collector, stats) = starts
        .into_par_iter()
        .fold(
            || {
                (
                    PathExplorer::with_options(grid, index, options),
                    VisitedMask::new(grid),
                    ResultCollector::new(),
                )
            },
            |(mut explorer, mut mask, mut collector), start| {
                explorer.explore_from(start, &mut mask, &mut collector);
                (explorer, mask, collector)
            },
        )
        .map(|(explorer, mask, collector)| {
            debug_assert!(mask.is_clear(), "worker leaked marks in its visited mask");
            (collector, explorer.stats())
        })
        .reduce(
            || (ResultCollector::new(), SearchStats::default()),
            |(mut left, left_stats), (right, right_stats)| {
                left.merge(right);
                (left, left_stats + right_stats)
            },
        );

    log::debug!(
        "Parallel search over [{}x{}] grid: [{}] explorations, [{}] cells entered, [{}] words found.",
        grid.rows(),
        grid.columns(),
        stats.explorations,
        stats.cells_entered,
        stats.words_found
    );

    (collector.into_words(), stats)
}
