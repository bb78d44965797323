//! Turn rotation, consecutive sixes and extra rolls.
//!
//! `TurnState` is a small value type. Every transition returns a new state
//! and leaves the receiver untouched, so previews are free.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::PlayerColor;
use crate::dice::{ends_turn_after_sixes, grants_extra_turn};

/// Whose turn it is and how the current turn is going.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    /// Player allowed to roll.
    pub current_player: PlayerColor,

    /// Sixes rolled in a row this turn (0-2 between transitions).
    pub consecutive_sixes: u8,

    /// The last roll earned another roll.
    pub has_extra_turn: bool,

    /// Completed rounds plus one; bumps when play returns to the first active player.
    pub turn_number: u32,
}

impl TurnState {
    /// Fresh state with `starting_player` to roll in round 1.
    #[must_use]
    pub fn new(starting_player: PlayerColor) -> Self {
        Self {
            current_player: starting_player,
            consecutive_sixes: 0,
            has_extra_turn: false,
            turn_number: 1,
        }
    }

    /// Record a roll by the current player.
    ///
    /// A third six in a row clears both the streak and the extra roll.
    #[must_use]
    pub fn process_roll(&self, roll: u8) -> Self {
        let rolled_six = grants_extra_turn(roll);
        let consecutive_sixes = if rolled_six { self.consecutive_sixes.saturating_add(1) } else { 0 };

        if ends_turn_after_sixes(consecutive_sixes) {
            debug!(player = %self.current_player, "third consecutive six forfeits the turn");
            return Self {
                consecutive_sixes: 0,
                has_extra_turn: false,
                ..*self
            };
        }

        trace!(player = %self.current_player, roll, consecutive_sixes, "roll processed");
        Self {
            consecutive_sixes,
            has_extra_turn: rolled_six,
            ..*self
        }
    }

    /// False only while the six streak sits at the forfeit threshold.
    #[must_use]
    pub fn can_roll(&self) -> bool {
        !ends_turn_after_sixes(self.consecutive_sixes)
    }

    /// Hand the turn to the next active player.
    ///
    /// The round counter increases when the new player is first in `active_players`.
    /// If the first seat has just left the list, the seat after it becomes
    /// first, so handing over to it starts a new round straight away.
    #[must_use]
    pub fn advance_to_next(&self, active_players: &[PlayerColor]) -> Self {
        let next = next_player(self.current_player, active_players);
        let wrapped = active_players.first() == Some(&next);
        let turn_number = if wrapped { self.turn_number + 1 } else { self.turn_number };

        debug!(from = %self.current_player, to = %next, turn_number, "turn passes");
        Self {
            current_player: next,
            consecutive_sixes: 0,
            has_extra_turn: false,
            turn_number,
        }
    }

    /// Finish the current roll: spend an earned extra roll, or rotate.
    #[must_use]
    pub fn end_turn(&self, active_players: &[PlayerColor]) -> Self {
        if self.has_extra_turn {
            return Self {
                has_extra_turn: false,
                ..*self
            };
        }
        self.advance_to_next(active_players)
    }
}

/// Who would play after `current`, without changing any state.
///
/// Walks the fixed color cycle from `current` and returns the first seat in
/// `active_players`. Returns `current` when no other seat is active.
#[must_use]
pub fn next_player(current: PlayerColor, active_players: &[PlayerColor]) -> PlayerColor {
    let mut candidate = current.successor();
    while candidate != current {
        if active_players.contains(&candidate) {
            return candidate;
        }
        candidate = candidate.successor();
    }
    current
}
