//! Board geometry and position arithmetic.
//!
//! The shared track is a ring of 72 cells split into four 18-cell quadrants,
//! one per color. A token's progress is tracked as *distance traveled* from
//! its color's start cell; after 52 cells it leaves the ring for a private
//! 6-cell finish lane and is finished at exactly 58.
//!
//! Everything here is pure arithmetic with no token state.

mod model;

pub use model::{
    absolute_position, advance, distance_traveled, finish_lane_index, is_finish_lane_entry,
    is_finished, is_legal_move, is_safe_cell, start_offset, FINISH_DISTANCE, FINISH_LANE_LENGTH,
    MAIN_TRACK_DISTANCE, QUADRANT_LENGTH, SAFE_CELLS, TOKENS_PER_PLAYER, TRACK_LENGTH,
};
