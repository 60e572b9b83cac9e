//! Errors surfaced before a search begins.

use thiserror::Error;

/// Shorthand for results produced by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while validating input to the search.
///
/// Conditions that simply cannot produce a match (an empty grid, an empty
/// dictionary, empty dictionary entries) are not errors, they yield an empty
/// result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A row of the grid did not have the same length as the first row.
    #[error("grid is not rectangular: row {row} has {found} letters, expected {expected}")]
    InvalidGridShape {
        /// Zero-based index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_row() {
        let err = Error::InvalidGridShape {
            row: 2,
            expected: 4,
            found: 3,
        };

        assert_eq!(
            err.to_string(),
            "grid is not rectangular: row 2 has 3 letters, expected 4"
        );
    }
}
