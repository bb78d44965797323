//! Die generation and roll predicates.

use crate::core::{GameRng, RulesError};

/// Lowest face of the die.
pub const MIN_VALUE: u8 = 1;
/// Highest face of the die.
pub const MAX_VALUE: u8 = 6;
/// Rolling this earns another roll.
pub const EXTRA_TURN_VALUE: u8 = 6;
/// Rolling this lets a token leave home.
pub const OPEN_TOKEN_VALUE: u8 = 6;
/// This many sixes in a row ends the turn with no move.
pub const MAX_CONSECUTIVE_SIXES: u8 = 3;

/// Roll the die: uniform in [1, 6].
pub fn roll(rng: &mut GameRng) -> u8 {
    rng.roll_die()
}

/// True iff the value earns another roll.
#[must_use]
pub const fn grants_extra_turn(value: u8) -> bool {
    value == EXTRA_TURN_VALUE
}

/// True iff the value lets a token leave home.
///
/// Same face as the extra-turn rule today, but the two rules are independent.
#[must_use]
pub const fn can_open_token(value: u8) -> bool {
    value == OPEN_TOKEN_VALUE
}

/// Validate an externally supplied dice value.
///
/// Rejects fractions, NaN, infinities and anything outside [1, 6].
#[must_use]
pub fn is_valid_roll(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(MIN_VALUE)
        && value <= f64::from(MAX_VALUE)
}

/// Check an integer dice value, returning it unchanged when valid.
pub fn validate_roll(value: u8) -> Result<u8, RulesError> {
    if is_valid_roll(f64::from(value)) {
        Ok(value)
    } else {
        Err(RulesError::InvalidRoll(value))
    }
}

/// True once the run of sixes is long enough to forfeit the turn.
#[must_use]
pub const fn ends_turn_after_sixes(consecutive_sixes: u8) -> bool {
    consecutive_sixes >= MAX_CONSECUTIVE_SIXES
}
