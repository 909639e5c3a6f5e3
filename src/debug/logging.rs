use bevy::prelude::*;

use super::DebugState;
use crate::gameplay::state::{Board, BoardStats};

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    board: Res<Board>,
    stats: Res<BoardStats>,
) {
    let circles = board.registry().len();
    if circles.abs_diff(state.last_circle_count) > 30 {
        warn!(from = state.last_circle_count, to = circles, "circle count jumped");
    }
    state.last_circle_count = circles;

    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "BOARD frame={} t={:.3}s circles={} selecting={} batches={} matches={} removed={} cancelled={}",
            state.frame_counter,
            time.elapsed_secs(),
            circles,
            board.selection().len(),
            stats.batches_spawned,
            stats.matches,
            stats.circles_removed,
            stats.cancelled
        );
    }
}
