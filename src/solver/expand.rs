use crate::data::Dir;
use crate::map::MapModel;
use crate::state::PuzzleState;

/// The state after moving the player one cell in `dir`, possibly pushing a box.
///
/// Returns `None` when the player would walk into an obstacle or push a box
/// into an obstacle or another box. `state` becomes the parent of the result.
pub fn try_apply<'a>(
    map: &MapModel,
    state: &'a PuzzleState<'a>,
    dir: Dir,
) -> Option<PuzzleState<'a>> {
    let new_player_pos = state.player_pos + dir;
    if map.is_obstacle(new_player_pos) {
        return None;
    }

    let boxes = match state.boxes.binary_search(&new_player_pos) {
        // step
        Err(_) => state.boxes.clone(),
        // push
        Ok(box_index) => {
            let push_dest = new_player_pos + dir;
            if map.is_obstacle(push_dest) || state.has_box(push_dest) {
                return None;
            }
            let mut new_boxes = state.boxes.clone();
            new_boxes[box_index] = push_dest;
            new_boxes.sort();
            new_boxes
        }
    };

    Some(PuzzleState::child(state, new_player_pos, boxes, dir))
}
