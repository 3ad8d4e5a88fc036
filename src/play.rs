use std::io::{self, BufRead, Write};

use crate::config::Format;
use crate::data::Dir;
use crate::level::Level;
use crate::solver::try_apply;
use crate::state::PuzzleState;

/// Plays the level interactively, one command per line.
///
/// A line is either `reset`, `quit` or any number of `u`, `d`, `l`, `r`.
/// Illegal moves are ignored and don't count as steps.
///
/// Returns the number of steps if the level got solved
/// or `None` if the input ended or the player quit first.
pub fn play<R, W>(level: &Level, format: Format, input: R, mut output: W) -> io::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
{
    let map = &level.map;
    let mut state = level.state.clone();
    let mut steps = 0;

    writeln!(output, "{}", map.format_with_state(format, &state))?;
    if state.is_goal(map) {
        writeln!(output, "Puzzle solved in {} steps!", steps)?;
        return Ok(Some(steps));
    }

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "quit" => return Ok(None),
            "reset" => {
                state = level.state.clone();
                steps = 0;
            }
            cmds => {
                for c in cmds.chars() {
                    let dir = match Dir::from_char(c) {
                        Some(dir) => dir,
                        None => {
                            writeln!(output, "Unknown move: {}", c)?;
                            continue;
                        }
                    };
                    if let Some(new_state) = try_apply(map, &state, dir) {
                        let new_state = PuzzleState::initial(map, new_state.boxes, new_state.player_pos);
                        state = new_state;
                        steps += 1;
                    } else {
                        trace!("Illegal move {}", dir);
                    }
                }
            }
        }

        writeln!(output, "{}", map.format_with_state(format, &state))?;
        if state.is_goal(map) {
            writeln!(output, "Puzzle solved in {} steps!", steps)?;
            return Ok(Some(steps));
        }
    }
    Ok(None)
}
