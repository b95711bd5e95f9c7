use std::{convert::Infallible, fmt::Display, str::FromStr};

use crate::direction::Direction;

pub const START_CHAR: char = '@';
pub const END_CHAR: char = 'x';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    // None if the step leaves the grid through the top or left edge.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        let (delta_r, delta_c) = dir.offset();
        let r = self.r.checked_add_signed(delta_r)?;
        let c = self.c.checked_add_signed(delta_c)?;
        Some(Self::new(r, c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Start,
    End,
    Horizontal,
    Vertical,
    Turn,
    Letter(char),
    Blank,
}

impl From<char> for Tile {
    fn from(c: char) -> Self {
        match c {
            START_CHAR => Tile::Start,
            END_CHAR => Tile::End,
            '-' => Tile::Horizontal,
            '|' => Tile::Vertical,
            '+' => Tile::Turn,
            'A'..='Z' => Tile::Letter(c),
            _ => Tile::Blank,
        }
    }
}

impl Tile {
    pub fn is_path_character(&self) -> bool {
        matches!(self, Tile::Horizontal | Tile::Vertical | Tile::Turn)
    }

    /// The start marker is not walkable: a walk only ever leaves it.
    pub fn is_walkable(&self) -> bool {
        self.is_path_character() || matches!(self, Tile::Letter(_) | Tile::End)
    }
}

/// Rows of single characters. Rows may have different lengths, a column past
/// the end of its row is outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl FromStr for Grid {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(
            s.lines().map(|line| line.chars().collect()).collect(),
        ))
    }
}

impl Grid {
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// Builds a grid from string cells; a cell that isn't exactly one
    /// character (e.g. `""`) is blank.
    pub fn from_cells<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let mut chars = cell.as_ref().chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => c,
                            _ => ' ',
                        }
                    })
                    .collect()
            })
            .collect();

        Self::new(rows)
    }

    pub fn row_n(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_n(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn find_position(&self, target: char) -> Option<Position> {
        self.positions_of(target).next()
    }

    pub fn has_multiple_occurrences(&self, target: char) -> bool {
        self.positions_of(target).nth(1).is_some()
    }

    pub fn is_within_bounds(&self, pos: &Position) -> bool {
        self.rows.get(pos.r).is_some_and(|row| pos.c < row.len())
    }

    pub fn tile(&self, pos: &Position) -> Option<Tile> {
        self.char_at(pos).map(Tile::from)
    }

    pub fn char_at(&self, pos: &Position) -> Option<char> {
        self.rows.get(pos.r).and_then(|row| row.get(pos.c)).copied()
    }

    pub fn is_walkable(&self, pos: &Position) -> bool {
        self.tile(pos).is_some_and(|tile| tile.is_walkable())
    }

    /// The neighbor of `pos` along `dir`, if it's inside the grid and walkable.
    pub fn walkable_neighbor(&self, pos: &Position, dir: Direction) -> Option<Position> {
        pos.neighbor(dir).filter(|next| self.is_walkable(next))
    }

    fn positions_of(&self, target: char) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(move |(r, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, c)| **c == target)
                .map(move |(c, _)| Position::new(r, c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_tiles() {
        assert_eq!(Tile::from('@'), Tile::Start);
        assert_eq!(Tile::from('x'), Tile::End);
        assert_eq!(Tile::from('X'), Tile::Letter('X'));
        assert_eq!(Tile::from('a'), Tile::Blank);
        assert_eq!(Tile::from(' '), Tile::Blank);

        assert!(Tile::Turn.is_path_character());
        assert!(!Tile::Letter('A').is_path_character());
        assert!(!Tile::End.is_path_character());

        assert!(Tile::Letter('A').is_walkable());
        assert!(Tile::End.is_walkable());
        assert!(!Tile::Start.is_walkable());
        assert!(!Tile::Blank.is_walkable());
    }

    #[test]
    fn find_first_in_row_major_order() {
        let grid: Grid = " -A\nA-".parse().unwrap();
        assert_eq!(grid.find_position('A'), Some(Position::new(0, 2)));
        assert_eq!(grid.find_position('@'), None);
        assert!(grid.has_multiple_occurrences('A'));
        assert!(grid.has_multiple_occurrences('-'));
        assert!(!grid.has_multiple_occurrences('@'));
    }

    #[test]
    fn ragged_rows_bound_per_row() {
        let grid = Grid::from_cells([vec!["@", "-", "x"], vec![""]]);
        assert!(grid.is_within_bounds(&Position::new(0, 2)));
        assert!(grid.is_within_bounds(&Position::new(1, 0)));
        assert!(!grid.is_within_bounds(&Position::new(1, 1)));
        assert!(!grid.is_within_bounds(&Position::new(2, 0)));

        assert_eq!(grid.tile(&Position::new(1, 0)), Some(Tile::Blank));
        assert_eq!(grid.tile(&Position::new(1, 1)), None);
        assert_eq!(grid.cell_n(), 4);
    }

    #[test]
    fn neighbor_stops_at_top_left_edges() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.neighbor(Direction::Up), None);
        assert_eq!(origin.neighbor(Direction::Left), None);
        assert_eq!(origin.neighbor(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(origin.neighbor(Direction::Right), Some(Position::new(0, 1)));
    }
}
