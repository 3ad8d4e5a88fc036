use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Plain,
    Xsb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Ucs,
    AStar,
}

impl Strategy {
    /// The estimator used when none is requested explicitly.
    pub fn default_heuristic(self) -> Heuristic {
        match self {
            Strategy::Bfs | Strategy::Ucs => Heuristic::Zero,
            Strategy::AStar => Heuristic::NearestTarget,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Ucs => write!(f, "ucs"),
            Strategy::AStar => write!(f, "a-star"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    Zero,
    NearestTarget,
    /// Distance from the player to the closest box, kept for comparison.
    /// Never goes above zero.
    SingleNearest,
}

impl Heuristic {
    pub const NAMES: [&'static str; 3] = ["zero", "nearest-target", "single-nearest"];
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Heuristic::Zero => Self::NAMES[0],
            Heuristic::NearestTarget => Self::NAMES[1],
            Heuristic::SingleNearest => Self::NAMES[2],
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(Heuristic::Zero),
            "nearest-target" => Ok(Heuristic::NearestTarget),
            "single-nearest" => Ok(Heuristic::SingleNearest),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}
