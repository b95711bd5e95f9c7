use std::{collections::HashSet, fmt::Display};

use tracing::{debug, trace};

use crate::{
    direction::{resolve_turn, Direction},
    error::Error,
    grid::{Grid, Position, Tile, END_CHAR, START_CHAR},
};

/// Outcome of a successful walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    letters: String,
    path: String,
    positions: Vec<Position>,
}

impl Display for Walk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Letters: {}", self.letters)?;
        write!(f, "Path: {}", self.path)
    }
}

impl Walk {
    /// Letters in the order they were first reached, one per letter cell.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Every character stepped on, from the start marker to the end marker.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Position of each character in [`Walk::path`].
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

struct Walker<'a> {
    grid: &'a Grid,
    pos: Position,
    dir: Direction,
}

impl<'a> Walker<'a> {
    pub fn new(grid: &'a Grid, pos: Position, dir: Direction) -> Self {
        Self { grid, pos, dir }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn step(&mut self) -> Result<(), Error> {
        let (next_pos, next_dir) = self.next_step()?.ok_or(Error::BrokenPath)?;
        if next_dir != self.dir {
            debug!(pos = %self.pos, from = %self.dir, to = %next_dir, "turn");
        }

        self.pos = next_pos;
        self.dir = next_dir;
        Ok(())
    }

    fn next_step(&self) -> Result<Option<(Position, Direction)>, Error> {
        let tile = self.grid.tile(&self.pos);

        // A turn must change axis, it never falls through to going straight.
        if tile == Some(Tile::Turn) {
            return Ok(resolve_turn(self.grid, &self.pos, self.dir)?
                .and_then(|dir| self.towards(dir)));
        }

        if let Some(step) = self.towards(self.dir) {
            return Ok(Some(step));
        }

        if matches!(tile, Some(Tile::Letter(_))) {
            let back = self.dir.opposite();
            return Ok(self
                .dir
                .perpendiculars()
                .into_iter()
                .filter(|&dir| dir != back)
                .find_map(|dir| self.towards(dir)));
        }

        Ok(None)
    }

    fn towards(&self, dir: Direction) -> Option<(Position, Direction)> {
        self.grid
            .walkable_neighbor(&self.pos, dir)
            .map(|next_pos| (next_pos, dir))
    }
}

fn start_and_end(grid: &Grid) -> Result<(Position, Position), Error> {
    if grid.has_multiple_occurrences(START_CHAR) || grid.has_multiple_occurrences(END_CHAR) {
        return Err(Error::StartEndCount);
    }

    match (grid.find_position(START_CHAR), grid.find_position(END_CHAR)) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(Error::StartEndCount),
    }
}

fn starting_direction(grid: &Grid, start: &Position) -> Result<Direction, Error> {
    let mut dirs: Vec<Direction> = Direction::all()
        .iter()
        .copied()
        .filter(|&dir| grid.walkable_neighbor(start, dir).is_some())
        .collect();
    if dirs.len() != 1 {
        return Err(Error::StartingPathCount);
    }

    dirs.pop().ok_or(Error::InvalidStart)
}

/// Walks the map from its start marker to its end marker.
#[tracing::instrument(skip_all, fields(row_n = grid.row_n()))]
pub fn walk(grid: &Grid) -> Result<Walk, Error> {
    let res = walk_from_start(grid);
    if let Err(e) = &res {
        debug!("Map rejected: {}", e);
    }

    res
}

fn walk_from_start(grid: &Grid) -> Result<Walk, Error> {
    let (start, end) = start_and_end(grid)?;
    debug!(%start, %end, "found start and end");
    let dir = starting_direction(grid, &start)?;
    debug!(%dir, "starting direction");

    // Each (position, direction) pair shows up at most once unless the path cycles.
    let max_step_n = grid.cell_n() * 4 + 1;
    let mut walker = Walker::new(grid, start, dir);
    let mut letters = String::new();
    let mut path = String::new();
    let mut positions = Vec::new();
    let mut collected = HashSet::new();
    loop {
        let pos = *walker.pos();
        if positions.len() >= max_step_n {
            debug!(max_step_n, "step limit exceeded");
            return Err(Error::BrokenPath);
        }

        let c = grid.char_at(&pos).ok_or(Error::BrokenPath)?;
        trace!(%pos, dir = %walker.dir(), tile = %c, "step");
        path.push(c);
        positions.push(pos);
        if matches!(Tile::from(c), Tile::Letter(_)) && collected.insert(pos) {
            debug!(%pos, letter = %c, "collected letter");
            letters.push(c);
        }

        if pos == end {
            break;
        }

        walker.step()?;
    }

    Ok(Walk {
        letters,
        path,
        positions,
    })
}
