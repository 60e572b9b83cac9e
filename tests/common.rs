use grid_word_search::{Adjacency, Grid, Position};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::collections::HashSet;

/// Install the test logger once per test binary.
///
/// Honours `RUST_LOG`, e.g. `RUST_LOG=grid_word_search=debug`.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Return a deterministic generator for the given seed.
#[allow(dead_code)]
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate a `rows` × `columns` grid with letters drawn from `alphabet`.
///
/// # Panics
///  - If `alphabet` is empty.
#[allow(dead_code)]
pub fn random_grid(rng: &mut StdRng, rows: usize, columns: usize, alphabet: &[char]) -> Grid {
    let letters: Vec<Vec<char>> = (0..rows)
        .map(|_| {
            (0..columns)
                .map(|_| *alphabet.choose(rng).expect("alphabet must not be empty"))
                .collect()
        })
        .collect();

    Grid::new(letters).expect("generated rows all have the same length")
}

/// Generate a word of up to `max_len` letters, which may be empty.
#[allow(dead_code)]
pub fn random_word(rng: &mut StdRng, max_len: usize, alphabet: &[char]) -> String {
    let len = rng.gen_range(0..=max_len);

    (0..len)
        .map(|_| *alphabet.choose(rng).expect("alphabet must not be empty"))
        .collect()
}

/// Spell a word by taking a random self-avoiding walk of up to `max_len`
/// cells, so the word is known to be present in `grid`.
///
/// Returns `None` for an empty grid.
#[allow(dead_code)]
pub fn walked_word(
    rng: &mut StdRng,
    grid: &Grid,
    max_len: usize,
    adjacency: Adjacency,
) -> Option<String> {
    let positions: Vec<Position> = grid.positions().collect();
    let mut current = *positions.choose(rng)?;
    let mut visited = HashSet::from([current]);
    let mut word = String::from(grid[current]);

    while word.chars().count() < max_len {
        let options: Vec<Position> = grid
            .neighbours(current, adjacency)
            .filter(|next| !visited.contains(next))
            .collect();

        match options.choose(rng) {
            Some(next) => {
                current = *next;
                visited.insert(current);
                word.push(grid[current]);
            }
            None => break,
        }
    }

    Some(word)
}

/// Build a dictionary mixing words known to be present in `grid` with random
/// words that mostly are not.
#[allow(dead_code)]
pub fn mixed_dictionary(
    rng: &mut StdRng,
    grid: &Grid,
    size: usize,
    max_len: usize,
    alphabet: &[char],
) -> Vec<String> {
    (0..size)
        .filter_map(|_| {
            if rng.gen_bool(0.5) {
                let len = rng.gen_range(1..=max_len);
                walked_word(rng, grid, len, Adjacency::King)
            } else {
                Some(random_word(rng, max_len, alphabet))
            }
        })
        .collect()
}

/// Sort a result set for readable assertions.
#[allow(dead_code)]
pub fn sorted(words: HashSet<String>) -> Vec<String> {
    let mut words: Vec<_> = words.into_iter().collect();
    words.sort_unstable();
    words
}
