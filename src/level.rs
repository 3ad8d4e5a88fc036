use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::map::MapModel;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::PuzzleState;

/// A parsed level: the map and the initial state.
#[derive(Clone)]
pub struct Level {
    pub map: MapModel,
    pub state: PuzzleState<'static>,
}

impl Level {
    pub(crate) fn new(map: MapModel, state: PuzzleState<'static>) -> Self {
        Level { map, state }
    }

    pub fn plain(&self) -> MapFormatter<'_> {
        self.format(Format::Plain)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.format(Format::Xsb)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        self.map.format_with_state(format, &self.state)
    }

    pub fn solution<'a>(
        &'a self,
        moves: &'a Moves,
        include_steps: bool,
        format: Format,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.map, &self.state, moves, include_steps, format)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plain())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.plain())
    }
}
