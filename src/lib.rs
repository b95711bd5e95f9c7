use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

mod direction;
mod error;
mod grid;
mod walker;

pub use direction::{count_valid_turn_directions, resolve_turn, Direction};
pub use error::Error;
pub use grid::{Grid, Position, Tile, END_CHAR, START_CHAR};
pub use walker::{walk, Walk};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        rows.push(line.chars().collect());
    }

    Ok(Grid::new(rows))
}
