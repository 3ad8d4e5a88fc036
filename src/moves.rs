use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub(crate) fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())
        } else {
            write!(f, "{}", self.dir)
        }
    }
}

/// Moves from the initial state to the goal, in order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub fn dirs(&self) -> Vec<Dir> {
        self.0.iter().map(|m| m.dir).collect()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One token per move: `u`, `d`, `l` or `r`.
impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

/// Pushes in uppercase.
impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{:?}", mov)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_moves() -> Moves {
        Moves::new(vec![
            Move::new(Dir::Up, false),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, false),
            Move::new(Dir::Left, false),
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, true),
            Move::new(Dir::Down, true),
            Move::new(Dir::Left, true),
        ])
    }

    #[test]
    fn formatting_moves() {
        let moves = all_moves();
        assert_eq!(moves.to_string(), "urdlurdl");
        assert_eq!(format!("{:?}", moves), "urdlURDL");
        assert_eq!(Moves::default().to_string(), "");
    }

    #[test]
    fn counting() {
        let moves = all_moves();
        assert_eq!(moves.move_cnt(), 8);
        assert_eq!(moves.push_cnt(), 4);
        assert_eq!(
            moves.dirs()[..4],
            [Dir::Up, Dir::Right, Dir::Down, Dir::Left]
        );
    }

    #[test]
    fn iterating() {
        let moves = all_moves();

        let mut v = Vec::new();
        for &m in &moves {
            v.push(m);
        }
        for &m in moves.iter() {
            v.push(m);
        }
        for m in moves.clone() {
            v.push(m);
        }

        assert_eq!(v.len(), 24);
        for chunk in v.chunks(8) {
            assert_eq!(Moves::new(chunk.to_vec()), moves);
        }
    }
}
