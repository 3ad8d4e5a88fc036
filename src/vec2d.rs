use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    /// Like indexing but returns `None` outside the grid.
    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.index_of(pos)])
        } else {
            None
        }
    }

    /// A grid of the same size filled with `U::default()`.
    pub(crate) fn scratchpad<U: Default + Clone>(&self) -> Vec2d<U> {
        Vec2d {
            data: vec![U::default(); self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        pos.r as usize * self.cols + pos.c as usize
    }
}

impl<T: Default + Clone> Vec2d<T> {
    /// Rows shorter than the longest one get padded with `T::default()`.
    pub(crate) fn new(grid: &[Vec<T>]) -> Self {
        let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            data.extend_from_slice(row);
            data.extend((row.len()..cols).map(|_| T::default()));
        }
        Vec2d {
            data,
            rows: grid.len(),
            cols,
        }
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        debug_assert!(self.contains(index), "{:?} out of bounds", index);
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        debug_assert!(self.contains(index), "{:?} out of bounds", index);
        let index = self.index_of(index);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding() {
        let grid = Vec2d::new(&[vec![1, 2, 3], vec![4]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[Pos::new(1, 0)], 4);
        assert_eq!(grid[Pos::new(1, 2)], 0);
        assert_eq!(grid.get(Pos::new(2, 0)), None);
        assert_eq!(grid.get(Pos::new(0, -1)), None);
        assert_eq!(grid.get(Pos::new(0, 2)), Some(&3));
    }

    #[test]
    fn scratchpad() {
        let grid = Vec2d::new(&[vec![0u8; 2], vec![0u8; 2]]);
        let mut scratch: Vec2d<bool> = grid.scratchpad();
        scratch[Pos::new(1, 1)] = true;
        assert!(scratch[Pos::new(1, 1)]);
        assert!(!scratch[Pos::new(0, 1)]);
    }
}
