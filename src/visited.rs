//! Per-path record of which grid cells are in use.

use crate::grid::{Grid, Position};
use core::ops::{Deref, DerefMut};

/// A boolean matrix with the same dimensions as a [`Grid`], marking the cells
/// on the path currently being explored.
///
/// Cells are only marked through [`VisitedMask::mark`], which hands back a
/// [`Mark`] guard. Dropping the guard unmarks the cell, so every mark is
/// released when its owning stack frame exits, whether by returning normally
/// or by unwinding.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    num_columns: usize,
    cells: Vec<bool>,
    marked: usize,
}

impl VisitedMask {
    /// Create an unmarked mask covering every cell of `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self::with_dimensions(grid.rows(), grid.columns())
    }

    /// Create an unmarked mask of `rows` × `columns` cells.
    pub fn with_dimensions(rows: usize, columns: usize) -> Self {
        VisitedMask {
            num_columns: columns,
            cells: vec![false; rows * columns],
            marked: 0,
        }
    }

    #[inline]
    fn to_index(&self, position: Position) -> usize {
        debug_assert!(position.column < self.num_columns);
        position.row * self.num_columns + position.column
    }

    /// Return true if `position` is on the current path.
    #[inline]
    pub fn is_visited(&self, position: Position) -> bool {
        self.cells[self.to_index(position)]
    }

    /// Mark `position` as visited until the returned guard is dropped.
    ///
    /// The guard dereferences to the mask, so deeper frames keep marking
    /// through it.
    ///
    /// # Panics
    ///
    /// Panics if `position` is already marked, or lies outside of the mask.
    pub fn mark(&mut self, position: Position) -> Mark<'_> {
        let index = self.to_index(position);
        assert!(
            !self.cells[index],
            "cell {:?} is already on the current path",
            position
        );

        self.cells[index] = true;
        self.marked += 1;

        Mark {
            mask: self,
            position,
        }
    }

    fn unmark(&mut self, position: Position) {
        let index = self.to_index(position);
        debug_assert!(self.cells[index], "mismatched number of mark & unmark");

        self.cells[index] = false;
        self.marked -= 1;
    }

    /// Return the number of cells currently marked.
    pub fn marked_count(&self) -> usize {
        self.marked
    }

    /// Return true if no cell is marked.
    pub fn is_clear(&self) -> bool {
        self.marked == 0
    }
}

/// Scoped hold on a single cell of a [`VisitedMask`].
#[derive(Debug)]
pub struct Mark<'m> {
    mask: &'m mut VisitedMask,
    position: Position,
}

impl Mark<'_> {
    /// Return the cell held by this guard.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for Mark<'_> {
    type Target = VisitedMask;

    fn deref(&self) -> &Self::Target {
        self.mask
    }
}

impl DerefMut for Mark<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.mask
    }
}

impl Drop for Mark<'_> {
    fn drop(&mut self) {
        self.mask.unmark(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn p(row: usize, column: usize) -> Position {
        Position { row, column }
    }

    #[test]
    fn guard_drop_unmarks() {
        let mut mask = VisitedMask::with_dimensions(2, 2);

        {
            let mark = mask.mark(p(0, 1));
            assert_eq!(mark.position(), p(0, 1));
            assert!(mark.is_visited(p(0, 1)));
            assert!(!mark.is_visited(p(1, 0)));
            assert_eq!(mark.marked_count(), 1);
        }

        assert!(mask.is_clear());
        assert!(!mask.is_visited(p(0, 1)));
    }

    #[test]
    fn nested_marks_track_the_path() {
        let mut mask = VisitedMask::with_dimensions(3, 3);

        let mut first = mask.mark(p(0, 0));
        {
            let mut second = first.mark(p(1, 1));
            {
                let third = second.mark(p(2, 2));
                assert_eq!(third.marked_count(), 3);
            }
            assert_eq!(second.marked_count(), 2);
            assert!(!second.is_visited(p(2, 2)));
        }
        assert_eq!(first.marked_count(), 1);
        drop(first);

        assert!(mask.is_clear());
    }

    #[test]
    #[should_panic(expected = "already on the current path")]
    fn double_mark_panics() {
        let mut mask = VisitedMask::with_dimensions(1, 2);
        let mut first = mask.mark(p(0, 0));
        let _again = first.mark(p(0, 0));
    }

    #[test]
    fn unwinding_releases_marks() {
        let mut mask = VisitedMask::with_dimensions(2, 3);

        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut outer = mask.mark(p(0, 0));
            let _inner = outer.mark(p(1, 2));
            panic!("abandon exploration");
        }));

        assert!(result.is_err());
        assert!(mask.is_clear());
    }
}
