//! Reference search that looks for each word independently.
//!
//! This is the straightforward algorithm the trie-guided search replaces: one
//! full backtracking pass over the grid per dictionary word. It is kept as an
//! oracle for checking [`PathExplorer`](crate::PathExplorer) and is far slower
//! for large dictionaries.

use crate::grid::{Adjacency, Grid, Position};
use std::collections::HashSet;

/// Return every non-empty word from `words` that can be traced through `grid`.
pub fn find_words<W: AsRef<str>>(
    grid: &Grid,
    words: impl IntoIterator<Item = W>,
    adjacency: Adjacency,
) -> HashSet<String> {
    words
        .into_iter()
        .filter(|word| trace(grid, word.as_ref(), adjacency).is_some())
        .map(|word| word.as_ref().to_owned())
        .collect()
}

/// Return one path of distinct, adjacent cells spelling `word`, if any.
///
/// Always `None` for the empty word.
pub fn trace(grid: &Grid, word: &str, adjacency: Adjacency) -> Option<Vec<Position>> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() || letters.len() > grid.len() {
        return None;
    }

    let mut visited = vec![false; grid.len()];
    let mut path = Vec::with_capacity(letters.len());

    for start in grid.positions() {
        if extend(grid, &letters, adjacency, start, &mut visited, &mut path) {
            return Some(path);
        }
    }

    None
}

fn extend(
    grid: &Grid,
    letters: &[char],
    adjacency: Adjacency,
    position: Position,
    visited: &mut [bool],
    path: &mut Vec<Position>,
) -> bool {
    let index = grid.to_index(position);
    if visited[index] || grid[position] != letters[path.len()] {
        return false;
    }

    visited[index] = true;
    path.push(position);

    if path.len() == letters.len() {
        return true;
    }

    for neighbour in grid.neighbours(position, adjacency) {
        if extend(grid, letters, adjacency, neighbour, visited, path) {
            return true;
        }
    }

    visited[index] = false;
    path.pop();

    false
}

/// Return true if `path` is a sequence of distinct, pairwise adjacent cells of
/// `grid` whose letters spell `word`.
pub fn is_valid_path(grid: &Grid, word: &str, path: &[Position], adjacency: Adjacency) -> bool {
    let distinct: HashSet<_> = path.iter().collect();

    distinct.len() == path.len()
        && path.iter().all(|position| grid.contains(*position))
        && path
            .windows(2)
            .all(|pair| pair[0].is_adjacent(pair[1], adjacency))
        && path.iter().map(|position| grid[*position]).eq(word.chars())
}
