use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Obstacle,
    Target,
}

impl Default for MapCell {
    fn default() -> Self {
        MapCell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

impl Default for Contents {
    fn default() -> Self {
        Contents::Empty
    }
}

/// Row and column of a cell.
///
/// Signed so that stepping off the edge of the grid produces a position
/// that simply isn't inside it instead of wrapping around.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    /// Manhattan distance
    pub fn dist(self, other: Pos) -> i32 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos::new(self.r + dr, self.c + dc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Right,
    Left,
}

/// The order in which successors are generated.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Right, Dir::Left];

impl Dir {
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Right => (0, 1),
            Dir::Left => (0, -1),
        }
    }

    pub fn from_char(c: char) -> Option<Dir> {
        match c {
            'u' => Some(Dir::Up),
            'd' => Some(Dir::Down),
            'r' => Some(Dir::Right),
            'l' => Some(Dir::Left),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Right => write!(f, "r"),
            Dir::Left => write!(f, "l"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping() {
        let pos = Pos::new(2, 3);
        assert_eq!(pos + Dir::Up, Pos::new(1, 3));
        assert_eq!(pos + Dir::Down, Pos::new(3, 3));
        assert_eq!(pos + Dir::Right, Pos::new(2, 4));
        assert_eq!(pos + Dir::Left, Pos::new(2, 2));
        assert_eq!(pos + Dir::Up + Dir::Down, pos);
        assert_eq!(pos + Dir::Right + Dir::Left, pos);
    }

    #[test]
    fn off_the_edge() {
        assert_eq!(Pos::new(0, 0) + Dir::Up, Pos::new(-1, 0));
    }

    #[test]
    fn manhattan() {
        assert_eq!(Pos::new(1, 1).dist(Pos::new(4, 3)), 5);
        assert_eq!(Pos::new(4, 3).dist(Pos::new(1, 1)), 5);
        assert_eq!(Pos::new(2, 2).dist(Pos::new(2, 2)), 0);
    }

    #[test]
    fn tokens() {
        let s: String = DIRECTIONS.iter().map(|d| d.to_string()).collect();
        assert_eq!(s, "udrl");
        for c in s.chars() {
            assert_eq!(Dir::from_char(c).unwrap().to_string(), c.to_string());
        }
        assert_eq!(Dir::from_char('x'), None);
    }
}
