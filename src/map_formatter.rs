use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Contents, MapCell, Pos};
use crate::state::PuzzleState;
use crate::vec2d::Vec2d;

pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    state: Option<&'a PuzzleState<'a>>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(
        grid: &'a Vec2d<MapCell>,
        state: Option<&'a PuzzleState<'a>>,
        format: Format,
    ) -> Self {
        Self {
            grid,
            state,
            format,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid: Vec2d<Contents> = self.grid.scratchpad();
        if let Some(state) = self.state {
            for &b in state.boxes() {
                state_grid[b] = Contents::Box;
            }
            state_grid[state.player_pos()] = Contents::Player;
        }

        for r in 0..self.grid.rows() as i32 {
            // don't print trailing empty cells to match the input level strings
            let mut last_non_empty = None;
            for c in 0..self.grid.cols() as i32 {
                let pos = Pos::new(r, c);
                if self.grid[pos] != MapCell::Empty || state_grid[pos] != Contents::Empty {
                    last_non_empty = Some(c);
                }
            }

            if let Some(last) = last_non_empty {
                for c in 0..=last {
                    let pos = Pos::new(r, c);
                    let cell = self.grid[pos];

                    match self.format {
                        Format::Plain => Self::write_cell_plain(cell, state_grid[pos], f)?,
                        Format::Xsb => Self::write_cell_xsb(cell, state_grid[pos], f)?,
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell_plain(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Empty, Contents::Empty) => write!(f, " "),
            (MapCell::Empty, Contents::Box) => write!(f, "B"),
            (MapCell::Empty, Contents::Player) => write!(f, "P"),
            (MapCell::Obstacle, Contents::Empty) => write!(f, "#"),
            (MapCell::Obstacle, _) => unreachable!("Obstacle with non-empty contents"),
            (MapCell::Target, Contents::Empty) => write!(f, "T"),
            (MapCell::Target, Contents::Box) => write!(f, "b"),
            (MapCell::Target, Contents::Player) => write!(f, "p"),
        }
    }

    fn write_cell_xsb(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Empty, Contents::Empty) => write!(f, " "),
            (MapCell::Empty, Contents::Box) => write!(f, "$"),
            (MapCell::Empty, Contents::Player) => write!(f, "@"),
            (MapCell::Obstacle, Contents::Empty) => write!(f, "#"),
            (MapCell::Obstacle, _) => unreachable!("Obstacle with non-empty contents"),
            (MapCell::Target, Contents::Empty) => write!(f, "."),
            (MapCell::Target, Contents::Box) => write!(f, "*"),
            (MapCell::Target, Contents::Player) => write!(f, "+"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
