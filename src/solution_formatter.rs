use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::map::MapModel;
use crate::moves::Moves;
use crate::solver::try_apply;
use crate::state::PuzzleState;

/// Replays moves from the initial state and writes the board after each of them.
pub struct SolutionFormatter<'a> {
    map: &'a MapModel,
    initial_state: &'a PuzzleState<'a>,
    moves: &'a Moves,
    include_steps: bool,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        map: &'a MapModel,
        initial_state: &'a PuzzleState<'a>,
        moves: &'a Moves,
        include_steps: bool,
        format: Format,
    ) -> Self {
        Self {
            map,
            initial_state,
            moves,
            include_steps,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            self.map.format_with_state(self.format, self.initial_state)
        )?;
        let mut last_state = self.initial_state.clone();
        for mov in self.moves {
            // moves from a different level don't apply
            let new_state = try_apply(self.map, &last_state, mov.dir).ok_or(fmt::Error)?;
            // drop the parent link so the states don't borrow each other
            let new_state = PuzzleState::initial(self.map, new_state.boxes, new_state.player_pos);
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", self.map.format_with_state(self.format, &new_state))?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Format, Strategy};
    use crate::level::Level;
    use crate::Solve;

    #[test]
    fn replaying() {
        let level: Level = r"
#######
#P B T#
#######
"
        .parse()
        .unwrap();
        let moves = level.solve(Strategy::Bfs, false).moves.unwrap();
        assert_eq!(moves.to_string(), "rrr");

        let pushes = level.solution(&moves, false, Format::Plain).to_string();
        assert_eq!(
            pushes,
            "#######\n#P B T#\n#######\n\n#######\n#  PBT#\n#######\n\n#######\n#   Pb#\n#######\n\n"
        );

        let all = level.solution(&moves, true, Format::Xsb).to_string();
        assert_eq!(all.matches("@").count(), 4);
        assert!(all.ends_with("#   @*#\n#######\n\n"));
    }
}
