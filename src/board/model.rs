//! Track constants and position queries.

use crate::core::PlayerColor;

/// Cells on the shared circular track.
pub const TRACK_LENGTH: u8 = 72;
/// Cells per color quadrant; also the spacing between start cells.
pub const QUADRANT_LENGTH: u8 = 18;
/// Distance covered on the shared track before entering the finish lane.
pub const MAIN_TRACK_DISTANCE: u8 = 52;
/// Cells in each color's private finish lane.
pub const FINISH_LANE_LENGTH: u8 = 6;
/// Distance at which a token is finished.
pub const FINISH_DISTANCE: u8 = MAIN_TRACK_DISTANCE + FINISH_LANE_LENGTH;
/// Tokens owned by each player.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Cells where tokens cannot be captured: each start cell plus one more per quadrant.
pub const SAFE_CELLS: [u8; 8] = [0, 13, 18, 31, 36, 49, 54, 67];

/// Move `roll` cells forward around the ring.
#[must_use]
pub const fn advance(position: u8, roll: u8) -> u8 {
    ((position as u16 + roll as u16) % TRACK_LENGTH as u16) as u8
}

/// Start cell for a color.
#[must_use]
pub const fn start_offset(player: PlayerColor) -> u8 {
    player.start_offset()
}

/// True if tokens on this cell are immune to capture.
#[must_use]
pub fn is_safe_cell(position: u8) -> bool {
    SAFE_CELLS.contains(&(position % TRACK_LENGTH))
}

/// Distance from `start_offset` to `position` going forward, plus whole laps.
///
/// Both cells are taken modulo the track length. Huge lap counts saturate at
/// `u32::MAX`.
#[must_use]
pub fn distance_traveled(position: u8, start_offset: u8, laps_completed: u32) -> u32 {
    let position = position % TRACK_LENGTH;
    let start_offset = start_offset % TRACK_LENGTH;
    let within_lap = if position >= start_offset {
        u32::from(position - start_offset)
    } else {
        u32::from(TRACK_LENGTH - start_offset) + u32::from(position)
    };
    laps_completed
        .saturating_mul(u32::from(TRACK_LENGTH))
        .saturating_add(within_lap)
}

/// Absolute track cell for a token of `player` at `distance`.
///
/// `None` once the token has left the shared track for its finish lane.
#[must_use]
pub const fn absolute_position(player: PlayerColor, distance: u8) -> Option<u8> {
    if distance < MAIN_TRACK_DISTANCE {
        Some(advance(player.start_offset(), distance))
    } else {
        None
    }
}

/// Lane cell (0-6) for a distance inside the finish lane.
///
/// Distance 58 maps to `Some(6)` but that token is finished: check
/// [`is_finished`] first.
#[must_use]
pub const fn finish_lane_index(distance: u8) -> Option<u8> {
    if distance >= MAIN_TRACK_DISTANCE && distance <= FINISH_DISTANCE {
        Some(distance - MAIN_TRACK_DISTANCE)
    } else {
        None
    }
}

/// True iff the token has covered exactly the full course.
#[must_use]
pub const fn is_finished(distance: u8) -> bool {
    distance == FINISH_DISTANCE
}

/// True if a token at `distance` may move `roll` cells.
///
/// Inside the finish lane the roll must not overshoot the last cell.
#[must_use]
pub const fn is_legal_move(distance: u8, roll: u8) -> bool {
    if distance >= FINISH_DISTANCE {
        return false;
    }
    if distance >= MAIN_TRACK_DISTANCE {
        return distance as u16 + roll as u16 <= FINISH_DISTANCE as u16;
    }
    true
}

/// True if a token has come all the way round to its own start cell.
#[must_use]
pub fn is_finish_lane_entry(position: u8, player: PlayerColor, distance: u8) -> bool {
    distance >= MAIN_TRACK_DISTANCE - 1 && position == player.start_offset()
}
