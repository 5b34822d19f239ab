//! Idle/demo mode - the hen plays itself
//!
//! A jump takes the hen ~40 frames to land and it is highest about 20
//! frames after takeoff, so the jump is timed for the obstacle to be
//! level with the hen at the apex.

use super::state::GameState;

/// Frames from takeoff to the apex of a default jump
const APEX_FRAMES: f32 = 20.0;

/// Should the hen jump this frame?
pub fn wants_jump(state: &GameState) -> bool {
    if !state.hen.grounded || state.is_game_over() {
        return false;
    }

    let hen = state.hen.rect();
    // Jump when the gap closes to the distance covered before the apex,
    // less half the combined widths
    let trigger = APEX_FRAMES * state.speed - (hen.size.x + state.tuning.obstacle_size) / 2.0;

    state
        .obstacles
        .obstacles()
        .iter()
        .map(|o| o.pos.x - hen.right())
        .filter(|gap| *gap > 0.0)
        .any(|gap| gap <= trigger)
}
