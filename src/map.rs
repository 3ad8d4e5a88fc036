use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::parser::{self, ParserErr};
use crate::state::PuzzleState;
use crate::vec2d::Vec2d;

/// The static part of a level: obstacles and targets.
///
/// Never changes once loaded, everything that moves lives in `PuzzleState`.
#[derive(Clone, PartialEq, Eq)]
pub struct MapModel {
    pub(crate) grid: Vec2d<MapCell>,
    targets: Vec<Pos>,
}

impl MapModel {
    pub(crate) fn new(grid: Vec2d<MapCell>, mut targets: Vec<Pos>) -> Self {
        targets.sort();
        MapModel { grid, targets }
    }

    /// Parses a level and keeps only the map, see `Level` for the rest.
    pub fn load(source: &str) -> Result<MapModel, ParserErr> {
        parser::parse(source).map(|level| level.map)
    }

    /// Cells outside the grid count as obstacles.
    pub fn is_obstacle(&self, pos: Pos) -> bool {
        match self.grid.get(pos) {
            Some(&cell) => cell == MapCell::Obstacle,
            None => true,
        }
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Target)
    }

    /// Sorted
    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    /// (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.cols(), self.grid.rows())
    }

    pub fn format_with_state<'a>(
        &'a self,
        format: Format,
        state: &'a PuzzleState<'_>,
    ) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state), format)
    }

    pub fn xsb_with_state<'a>(&'a self, state: &'a PuzzleState<'_>) -> MapFormatter<'a> {
        self.format_with_state(Format::Xsb, state)
    }
}

impl Display for MapModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.grid, None, Format::Plain))
    }
}

impl Debug for MapModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry() {
        let map = MapModel::load(
            r"
######
#P B #
#  bT#
######
",
        )
        .unwrap();
        assert_eq!(map.dimensions(), (6, 4));
        assert_eq!(map.targets(), &[Pos::new(2, 3), Pos::new(2, 4)]);
        assert!(map.is_obstacle(Pos::new(0, 0)));
        assert!(!map.is_obstacle(Pos::new(1, 1)));
        assert!(!map.is_obstacle(Pos::new(1, 3)));
        assert!(map.is_target(Pos::new(2, 3)));
        assert!(!map.is_target(Pos::new(1, 3)));
    }

    #[test]
    fn outside_is_obstacle() {
        let map = MapModel::load("P").unwrap();
        assert_eq!(map.dimensions(), (1, 1));
        assert!(!map.is_obstacle(Pos::new(0, 0)));
        assert!(map.is_obstacle(Pos::new(-1, 0)));
        assert!(map.is_obstacle(Pos::new(0, 1)));
        assert!(map.is_obstacle(Pos::new(1, 0)));
    }

    #[test]
    fn formatting_map() {
        let map = MapModel::load(
            r"
#######
#PbBT #
#######
",
        )
        .unwrap();
        assert_eq!(map.targets().len(), 2);
        // boxes and the player are not part of the map
        assert_eq!(map.to_string(), "#######\n#  TT #\n#######\n");
        assert_eq!(format!("{:?}", map), map.to_string());
    }
}
