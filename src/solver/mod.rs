mod expand;
mod frontier;
#[cfg(feature = "graph")]
mod graph;
mod heuristics;
mod stats;

use std::fmt::{self, Debug, Formatter};
use std::time::{Duration, Instant};

use typed_arena::Arena;

use crate::config::{Heuristic, Strategy};
use crate::data::DIRECTIONS;
use crate::level::Level;
use crate::map::MapModel;
use crate::moves::{Move, Moves};
use crate::state::PuzzleState;
use crate::Solve;

use self::frontier::Frontier;

pub use self::expand::try_apply;
pub use self::stats::Stats;

/// Outcome of a finished search.
///
/// `moves` is `None` when the frontier ran out without reaching the goal.
pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub elapsed: Duration,
    pub strategy: Strategy,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, elapsed: Duration, strategy: Strategy) -> Self {
        Self {
            moves,
            stats,
            elapsed,
            strategy,
        }
    }

    pub fn explored(&self) -> u64 {
        self.stats.total_explored()
    }

    pub fn frontier_size(&self) -> u64 {
        self.stats.frontier_size()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", self.strategy, moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve_with(&self, strategy: Strategy, heuristic: Heuristic, print_status: bool) -> SolverOk {
        solve(self, strategy, heuristic, print_status)
    }
}

fn solve(level: &Level, strategy: Strategy, heuristic: Heuristic, print_status: bool) -> SolverOk {
    debug!("Solving using {} with {} heuristic", strategy, heuristic);
    let solver_ok = search(level, strategy, print_status, |map, state| {
        heuristic.evaluate(map, state)
    });
    match solver_ok.moves {
        Some(ref moves) => info!(
            "{} found {} moves after exploring {} states",
            strategy,
            moves.move_cnt(),
            solver_ok.explored()
        ),
        None => info!(
            "{} found no solution after exploring {} states",
            strategy,
            solver_ok.explored()
        ),
    }
    solver_ok
}

fn search<H>(level: &Level, strategy: Strategy, print_status: bool, heuristic: H) -> SolverOk
where
    H: Fn(&MapModel, &PuzzleState<'_>) -> i32,
{
    let started = Instant::now();
    let map = &level.map;

    let arena = Arena::new();
    let mut stats = Stats::new();
    let mut frontier = match strategy {
        Strategy::Bfs => Frontier::fifo(map),
        Strategy::Ucs | Strategy::AStar => Frontier::priority(map),
    };
    #[cfg(feature = "graph")]
    let mut graph = self::graph::Graph::new(map);

    let mut root =
        PuzzleState::initial(map, level.state.boxes().to_vec(), level.state.player_pos());
    root.heuristic = heuristic(map, &root);
    let root: &PuzzleState<'_> = arena.alloc(root);
    stats.add_created(root.depth);
    frontier.push(root);
    stats.update_frontier(frontier.len());
    #[cfg(feature = "graph")]
    graph.add(root);

    while let Some(cur) = frontier.pop() {
        #[cfg(feature = "graph")]
        graph.mark_explored(cur);

        if stats.add_explored(cur.depth) && print_status {
            println!(
                "Explored new depth: {} (explored {}, frontier {})",
                cur.depth,
                frontier.explored_len(),
                frontier.len()
            );
        }

        if cur.is_goal(map) {
            debug!("Solved, backtracking path");
            stats.update_frontier(frontier.len());
            #[cfg(feature = "graph")]
            graph.draw();
            return SolverOk::new(
                Some(backtrack_moves(cur)),
                stats,
                started.elapsed(),
                strategy,
            );
        }

        for &dir in &DIRECTIONS {
            let mut child = match try_apply(map, cur, dir) {
                Some(child) => child,
                None => continue,
            };
            stats.add_created(child.depth);
            if frontier.contains(&child.fingerprint(map)) {
                stats.add_duplicate(child.depth);
                continue;
            }

            child.heuristic = heuristic(map, &child);
            trace!("Queueing {:?}", child);
            let child: &PuzzleState<'_> = arena.alloc(child);
            frontier.push(child);
            #[cfg(feature = "graph")]
            graph.add(child);
        }
        stats.update_frontier(frontier.len());
    }

    debug!(
        "Frontier exhausted after exploring {} states",
        frontier.explored_len()
    );
    stats.update_frontier(0);
    #[cfg(feature = "graph")]
    graph.draw();
    SolverOk::new(None, stats, started.elapsed(), strategy)
}

fn backtrack_moves(final_state: &PuzzleState<'_>) -> Moves {
    let mut moves = Vec::new();
    let mut state = final_state;
    while let (Some(parent), Some(dir)) = (state.parent, state.action) {
        moves.push(Move::new(dir, parent.boxes != state.boxes));
        state = parent;
    }
    moves.reverse();
    Moves::new(moves)
}
