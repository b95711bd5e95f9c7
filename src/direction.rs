use std::fmt::Display;

use crate::{
    error::Error,
    grid::{Grid, Position},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "^"),
            Direction::Down => write!(f, "v"),
            Direction::Left => write!(f, "<"),
            Direction::Right => write!(f, ">"),
        }
    }
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }

    /// (delta row, delta column)
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn perpendiculars(&self) -> [Direction; 2] {
        if self.is_horizontal() {
            [Direction::Up, Direction::Down]
        } else {
            [Direction::Left, Direction::Right]
        }
    }
}

fn valid_turn_directions<'a>(
    grid: &'a Grid,
    pos: &Position,
    cur_dir: Direction,
) -> impl Iterator<Item = Direction> + 'a {
    let pos = *pos;
    cur_dir
        .perpendiculars()
        .into_iter()
        .filter(move |&dir| dir != cur_dir.opposite())
        .filter(move |&dir| grid.walkable_neighbor(&pos, dir).is_some())
}

pub fn count_valid_turn_directions(grid: &Grid, pos: &Position, cur_dir: Direction) -> usize {
    valid_turn_directions(grid, pos, cur_dir).count()
}

/// Picks the way out of a turn at `pos` when arriving along `cur_dir`.
///
/// Returns `None` if no perpendicular neighbor is walkable, and fails with
/// [`Error::MultipleDirections`] if the turn forks.
pub fn resolve_turn(
    grid: &Grid,
    pos: &Position,
    cur_dir: Direction,
) -> Result<Option<Direction>, Error> {
    let mut dirs = valid_turn_directions(grid, pos, cur_dir);
    let first = dirs.next();
    if dirs.next().is_some() {
        return Err(Error::MultipleDirections);
    }

    Ok(first)
}
