// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod play;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;

use crate::config::{Format, Heuristic, Strategy};
use crate::level::Level;
use crate::solver::SolverOk;

pub trait LoadLevel {
    /// Reads the file and detects the format from its contents.
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    /// Searches using the strategy's default heuristic.
    fn solve(&self, strategy: Strategy, print_status: bool) -> SolverOk {
        self.solve_with(strategy, strategy.default_heuristic(), print_status)
    }

    fn solve_with(&self, strategy: Strategy, heuristic: Heuristic, print_status: bool)
        -> SolverOk;
}
