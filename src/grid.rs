//! The rectangular letter grid that words are traced through.

use crate::error::{Error, Result};
use core::{ops::Index, str::FromStr};

/// A cell coordinate inside of a [`Grid`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// The row index, ranging from 0 to `rows - 1`.
    pub row: usize,
    /// The column index, ranging from 0 to `columns - 1`.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }

    /// Return true if `other` is a distinct cell next to this one under the
    /// given adjacency.
    pub fn is_adjacent(self, other: Position, adjacency: Adjacency) -> bool {
        let row_delta = self.row.abs_diff(other.row);
        let column_delta = self.column.abs_diff(other.column);

        match adjacency {
            Adjacency::King => row_delta <= 1 && column_delta <= 1 && self != other,
            Adjacency::Orthogonal => row_delta + column_delta == 1,
        }
    }
}

/// Which cells count as neighbours when extending a path.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// Horizontal, vertical and diagonal neighbours (8-connectivity).
    #[default]
    King,
    /// Horizontal and vertical neighbours only (4-connectivity).
    Orthogonal,
}

impl Adjacency {
    const KING_OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
    const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

    /// Return the `(row, column)` steps leading to each neighbour.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Adjacency::King => &Self::KING_OFFSETS,
            Adjacency::Orthogonal => &Self::ORTHOGONAL_OFFSETS,
        }
    }
}

/// An immutable, rectangular matrix of letters.
///
/// A grid with no rows, or with rows of length zero, is valid and simply
/// contains no cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    num_rows: usize,
    num_columns: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Create a grid from a sequence of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridShape`] if any row differs in length from
    /// the first one.
    pub fn new<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = char>,
    {
        let mut letters = Vec::new();
        let mut num_rows = 0;
        let mut num_columns = None;

        for (row, cells) in rows.into_iter().enumerate() {
            let before = letters.len();
            letters.extend(cells);
            let found = letters.len() - before;

            match num_columns {
                None => num_columns = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::InvalidGridShape {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            num_rows += 1;
        }

        Ok(Grid {
            num_rows,
            num_columns: num_columns.unwrap_or(0),
            letters,
        })
    }

    /// Return the number of rows.
    pub fn rows(&self) -> usize {
        self.num_rows
    }

    /// Return the number of columns.
    pub fn columns(&self) -> usize {
        self.num_columns
    }

    /// Return the number of cells.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Return true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Return the letter at `position`, or `None` if it is out of bounds.
    pub fn get(&self, position: Position) -> Option<char> {
        self.contains(position)
            .then(|| self.letters[self.to_index(position)])
    }

    /// Return true if `position` lies inside of the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.num_rows && position.column < self.num_columns
    }

    /// Return an iterator over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let num_columns = self.num_columns;

        (0..self.letters.len()).map(move |index| Position {
            row: index / num_columns,
            column: index % num_columns,
        })
    }

    /// Return an iterator over the in-bounds neighbours of `position`.
    pub fn neighbours(
        &self,
        position: Position,
        adjacency: Adjacency,
    ) -> impl Iterator<Item = Position> + '_ {
        adjacency
            .offsets()
            .iter()
            .filter_map(move |&(row_step, column_step)| {
                let row = position.row.checked_add_signed(row_step)?;
                let column = position.column.checked_add_signed(column_step)?;
                let neighbour = Position { row, column };

                self.contains(neighbour).then_some(neighbour)
            })
    }

    #[inline]
    pub(crate) fn to_index(&self, position: Position) -> usize {
        position.row * self.num_columns + position.column
    }
}

impl Index<Position> for Grid {
    type Output = char;

    fn index(&self, position: Position) -> &Self::Output {
        assert!(
            self.contains(position),
            "position {:?} is outside of a {}x{} grid",
            position,
            self.num_rows,
            self.num_columns
        );

        &self.letters[self.to_index(position)]
    }
}

/// Parse one row per non-blank line. Whitespace inside a line is ignored, so
/// `"a b\nc d"` and `"ab\ncd"` describe the same grid.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Grid::new(
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| line.chars().filter(|c| !c.is_whitespace())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, column: usize) -> Position {
        Position { row, column }
    }

    #[test]
    fn parse_rectangular_grid() {
        let grid: Grid = "a b c\nd e f\n".parse().unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid[p(1, 2)], 'f');
        assert_eq!(grid.get(p(2, 0)), None);
    }

    #[test]
    fn reject_ragged_grid() {
        let err = "abc\nde\nfgh".parse::<Grid>().unwrap_err();

        assert_eq!(
            err,
            Error::InvalidGridShape {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_grids_are_valid() {
        let no_rows = Grid::new(Vec::<Vec<char>>::new()).unwrap();
        assert!(no_rows.is_empty());
        assert_eq!(no_rows.positions().count(), 0);

        let empty_rows = Grid::new(vec![Vec::<char>::new(), Vec::new()]).unwrap();
        assert!(empty_rows.is_empty());
        assert_eq!(empty_rows.rows(), 2);
        assert_eq!(empty_rows.positions().count(), 0);
    }

    #[test]
    fn positions_are_row_major() {
        let grid: Grid = "ab\ncd\nef".parse().unwrap();
        let letters: String = grid.positions().map(|pos| grid[pos]).collect();

        assert_eq!(letters, "abcdef");
    }

    #[test]
    fn neighbour_counts() {
        let grid: Grid = "abc\ndef\nghi".parse().unwrap();

        assert_eq!(grid.neighbours(p(0, 0), Adjacency::King).count(), 3);
        assert_eq!(grid.neighbours(p(0, 1), Adjacency::King).count(), 5);
        assert_eq!(grid.neighbours(p(1, 1), Adjacency::King).count(), 8);

        assert_eq!(grid.neighbours(p(0, 0), Adjacency::Orthogonal).count(), 2);
        assert_eq!(grid.neighbours(p(1, 1), Adjacency::Orthogonal).count(), 4);
    }

    #[test]
    fn neighbours_match_adjacency_predicate() {
        let grid: Grid = "abcd\nefgh\nijkl".parse().unwrap();

        for adjacency in [Adjacency::King, Adjacency::Orthogonal] {
            for from in grid.positions() {
                let mut expected: Vec<_> = grid
                    .positions()
                    .filter(|to| from.is_adjacent(*to, adjacency))
                    .collect();
                let mut actual: Vec<_> = grid.neighbours(from, adjacency).collect();

                expected.sort();
                actual.sort();
                assert_eq!(actual, expected, "neighbours of {:?}", from);
            }
        }
    }
}
