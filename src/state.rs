use std::fmt::{self, Debug, Formatter};

use crate::data::{Dir, Pos};
use crate::map::MapModel;

/// Player and box positions plus the bookkeeping the search needs.
///
/// `parent` points to the state this one was expanded from; during a search
/// all states live in the same arena so the references form a tree rooted
/// at the initial state.
#[derive(Clone)]
pub struct PuzzleState<'a> {
    pub(crate) player_pos: Pos,
    // kept sorted so equal states produce equal fingerprints
    pub(crate) boxes: Vec<Pos>,
    pub(crate) depth: u32,
    pub(crate) heuristic: i32,
    pub(crate) parent: Option<&'a PuzzleState<'a>>,
    pub(crate) action: Option<Dir>,
}

/// Canonical identity of a state used for duplicate detection.
///
/// Includes the targets although they're the same for every state of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint<'a> {
    targets: &'a [Pos],
    boxes: &'a [Pos],
    player_pos: Pos,
}

impl<'a> PuzzleState<'a> {
    /// The root state: depth 0, heuristic 0, no parent and no action.
    pub fn initial(map: &MapModel, mut boxes: Vec<Pos>, player_pos: Pos) -> Self {
        debug_assert!(!map.is_obstacle(player_pos));
        debug_assert!(boxes.iter().all(|&b| !map.is_obstacle(b)));
        boxes.sort();
        PuzzleState {
            player_pos,
            boxes,
            depth: 0,
            heuristic: 0,
            parent: None,
            action: None,
        }
    }

    pub(crate) fn child(
        parent: &'a PuzzleState<'a>,
        player_pos: Pos,
        boxes: Vec<Pos>,
        action: Dir,
    ) -> Self {
        PuzzleState {
            player_pos,
            boxes,
            depth: parent.depth + 1,
            heuristic: 0,
            parent: Some(parent),
            action: Some(action),
        }
    }

    pub fn fingerprint<'s>(&'s self, map: &'s MapModel) -> Fingerprint<'s> {
        Fingerprint {
            targets: map.targets(),
            boxes: &self.boxes,
            player_pos: self.player_pos,
        }
    }

    /// All boxes are on a target.
    pub fn is_goal(&self, map: &MapModel) -> bool {
        self.boxes.iter().all(|&b| map.is_target(b))
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn heuristic(&self) -> i32 {
        self.heuristic
    }

    pub fn action(&self) -> Option<Dir> {
        self.action
    }

    pub fn parent(&self) -> Option<&'a PuzzleState<'a>> {
        self.parent
    }

    pub(crate) fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// Ordering key for the priority frontier.
    pub(crate) fn cost(&self) -> i64 {
        i64::from(self.depth) + i64::from(self.heuristic)
    }
}

impl Debug for PuzzleState<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // parent left out, it would print the whole chain
        f.debug_struct("PuzzleState")
            .field("player_pos", &self.player_pos)
            .field("boxes", &self.boxes)
            .field("depth", &self.depth)
            .field("heuristic", &self.heuristic)
            .field("action", &self.action)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn initial_state() {
        let level: Level = r"
#######
#PB T #
#  b  #
#######
"
        .parse()
        .unwrap();
        let state = &level.state;
        assert_eq!(state.player_pos(), Pos::new(1, 1));
        assert_eq!(state.boxes(), &[Pos::new(1, 2), Pos::new(2, 3)]);
        assert_eq!(state.depth(), 0);
        assert_eq!(state.heuristic(), 0);
        assert!(state.parent().is_none());
        assert!(state.action().is_none());
    }

    #[test]
    fn boxes_sorted() {
        let level: Level = "######\n#PBB #\n#TT  #\n######".parse().unwrap();
        let a = PuzzleState::initial(
            &level.map,
            vec![Pos::new(1, 3), Pos::new(1, 2)],
            Pos::new(1, 1),
        );
        let b = PuzzleState::initial(
            &level.map,
            vec![Pos::new(1, 2), Pos::new(1, 3)],
            Pos::new(1, 1),
        );
        assert_eq!(a.fingerprint(&level.map), b.fingerprint(&level.map));
        assert!(a.has_box(Pos::new(1, 3)));
        assert!(!a.has_box(Pos::new(1, 1)));
    }

    #[test]
    fn player_pos_distinguishes() {
        let level: Level = "#####\n#P  #\n#####".parse().unwrap();
        let a = PuzzleState::initial(&level.map, vec![], Pos::new(1, 1));
        let b = PuzzleState::initial(&level.map, vec![], Pos::new(1, 2));
        assert_ne!(a.fingerprint(&level.map), b.fingerprint(&level.map));
    }

    #[test]
    fn goal_is_idempotent() {
        let solved: Level = "#####\n#Pb #\n#####".parse().unwrap();
        let unsolved: Level = "#####\n#PBT#\n#####".parse().unwrap();
        for _ in 0..3 {
            assert!(solved.state.is_goal(&solved.map));
            assert!(!unsolved.state.is_goal(&unsolved.map));
        }
        assert_eq!(unsolved.state.boxes(), &[Pos::new(1, 2)]);
    }

    #[test]
    fn no_boxes_is_goal() {
        let level: Level = "###\n#P#\n###".parse().unwrap();
        assert!(level.state.is_goal(&level.map));
    }
}
