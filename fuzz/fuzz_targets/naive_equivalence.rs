#![no_main]

use grid_word_search::{naive, Adjacency, Grid, PathExplorer, PrefixIndex, SearchOptions};
use libfuzzer_sys::fuzz_target;

/// A grid of at most 4 × 4 cells and a handful of short words, all drawn from
/// a three letter alphabet so that matches are common.
#[derive(Debug)]
struct SearchInput {
    grid: Grid,
    words: Vec<String>,
    adjacency: Adjacency,
}

fn letter(byte: u8) -> char {
    (b'a' + byte % 3) as char
}

impl<'a> arbitrary::Arbitrary<'a> for SearchInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let rows = u.int_in_range(1..=4)?;
        let columns = u.int_in_range(1..=4)?;
        let cells = u.bytes(rows * columns)?;

        let grid = Grid::new(
            cells
                .chunks(columns)
                .map(|row| row.iter().copied().map(letter)),
        )
        .map_err(|_| arbitrary::Error::IncorrectFormat)?;

        let num_words = u.int_in_range(0..=8)?;
        let words = (0..num_words)
            .map(|_| {
                let len = u.int_in_range(0..=6)?;
                Ok(u.bytes(len)?.iter().copied().map(letter).collect())
            })
            .collect::<arbitrary::Result<Vec<String>>>()?;

        let adjacency = if u.arbitrary()? {
            Adjacency::King
        } else {
            Adjacency::Orthogonal
        };

        Ok(SearchInput {
            grid,
            words,
            adjacency,
        })
    }
}

fuzz_target!(|input: SearchInput| {
    let options = SearchOptions::default().adjacency(input.adjacency);
    let index = PrefixIndex::build(&input.words);

    let found = PathExplorer::with_options(&input.grid, &index, options).search();
    let expected = naive::find_words(&input.grid, &input.words, input.adjacency);

    assert_eq!(found, expected);
});
