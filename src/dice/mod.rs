//! Dice semantics.
//!
//! A single six-sided die drives the whole game:
//! - A 6 opens a token from home and earns an extra roll
//! - A third consecutive 6 forfeits the turn
//!
//! The generator is `roll`; the rest are predicates over a rolled value.

mod roll;

pub use roll::{
    can_open_token, ends_turn_after_sixes, grants_extra_turn, is_valid_roll, roll, validate_roll,
    EXTRA_TURN_VALUE, MAX_CONSECUTIVE_SIXES, MAX_VALUE, MIN_VALUE, OPEN_TOKEN_VALUE,
};
