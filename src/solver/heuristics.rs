use crate::config::Heuristic;
use crate::map::MapModel;
use crate::state::PuzzleState;

// less is better

impl Heuristic {
    pub fn evaluate(self, map: &MapModel, state: &PuzzleState<'_>) -> i32 {
        match self {
            Heuristic::Zero => zero(map, state),
            Heuristic::NearestTarget => nearest_target(map, state),
            Heuristic::SingleNearest => single_nearest(map, state),
        }
    }
}

fn zero(_map: &MapModel, _state: &PuzzleState<'_>) -> i32 {
    0
}

/// Sum of distances from each box to its nearest target.
///
/// Ignores walls and other boxes, so it can both under- and overestimate
/// the real number of moves left (several boxes may pick the same target).
fn nearest_target(map: &MapModel, state: &PuzzleState<'_>) -> i32 {
    let mut dist_sum = 0;
    for &box_pos in state.boxes() {
        if map.is_target(box_pos) {
            continue;
        }
        let mut min = i32::max_value();
        for &target in map.targets() {
            let dist = box_pos.dist(target);
            if dist < min {
                min = dist;
            }
        }
        dist_sum += min;
    }
    dist_sum
}

/// Minimum over boxes not on a target of the box to player distance,
/// starting from 0. Distances are never negative so this stays 0.
fn single_nearest(map: &MapModel, state: &PuzzleState<'_>) -> i32 {
    let mut closest = 0;
    for &box_pos in state.boxes() {
        if map.is_target(box_pos) {
            continue;
        }
        let dist = box_pos.dist(state.player_pos());
        if dist < closest {
            closest = dist;
        }
    }
    closest
}
