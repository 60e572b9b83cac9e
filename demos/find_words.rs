//! Print every word from a word list that can be traced through a grid.
//! Usage:
//!
//! ```bash
//! cargo run --release --example find_words grid.txt /usr/share/dict/words
//! ```
//!
//! The grid file holds one row per line. Words are read one per line, and
//! compared against the grid case-sensitively.

use grid_word_search::{parallel, Grid, PrefixIndex, SearchOptions};
use std::{error::Error, fs};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <grid file> <word list>", args[0]);
        std::process::exit(1);
    }

    let grid: Grid = fs::read_to_string(&args[1])?.parse()?;
    let word_list = fs::read_to_string(&args[2])?;
    let index = PrefixIndex::build(word_list.lines().map(str::trim));

    log::info!(
        "Searching [{}x{}] grid for [{}] words.",
        grid.rows(),
        grid.columns(),
        index.len()
    );

    let mut found: Vec<String> = parallel::search(&grid, &index, SearchOptions::default())
        .into_iter()
        .collect();
    found.sort_unstable();

    for word in &found {
        println!("{}", word);
    }

    Ok(())
}
