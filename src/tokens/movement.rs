//! Token movement and capture rules.
//!
//! Each move is a pure transition: the caller passes the token, the roll
//! and a snapshot of every token on the board, and gets back the updated
//! mover plus any opponent it sent home. Nothing else changes.

use smallvec::SmallVec;
use tracing::debug;

use super::token::{MoveOutcome, Token, TokenStatus};
use crate::board::{is_finished, is_legal_move, is_safe_cell, TOKENS_PER_PLAYER};
use crate::core::RulesError;
use crate::dice::{can_open_token, validate_roll};

/// Tokens that may move with a roll, in input order.
pub type Moveable = SmallVec<[Token; TOKENS_PER_PLAYER]>;

/// True if `token` may move with `roll`.
///
/// Home tokens need an opening roll, finished tokens never move, and
/// active tokens follow the board's exact-finish rule.
#[must_use]
pub fn can_move(token: &Token, roll: u8) -> bool {
    if validate_roll(roll).is_err() {
        return false;
    }
    match token.status {
        TokenStatus::Home => can_open_token(roll),
        TokenStatus::Active => is_legal_move(token.distance, roll),
        TokenStatus::Finished => false,
    }
}

/// Bring a home token onto its start cell at distance 0.
pub fn open_token(token: &Token) -> Result<Token, RulesError> {
    if !token.is_home() {
        return Err(RulesError::TokenNotHome(token.id));
    }
    Ok(token.at_distance(0))
}

/// Reset a token to home.
#[must_use]
pub fn send_home(token: &Token) -> Token {
    Token {
        status: TokenStatus::Home,
        position: None,
        distance: 0,
        ..*token
    }
}

/// First active opponent token sharing `token`'s cell, if that cell is open to capture.
///
/// Tokens off the shared track and tokens on safe cells never capture.
#[must_use]
pub fn find_capture<'a>(token: &Token, all_tokens: &'a [Token]) -> Option<&'a Token> {
    let position = token.position?;
    if is_safe_cell(position) {
        return None;
    }
    all_tokens.iter().find(|other| {
        other.id != token.id
            && other.player() != token.player()
            && other.is_active()
            && other.position == Some(position)
    })
}

/// Move `token` by `roll`, resolving any capture against `all_tokens`.
///
/// Fails with [`RulesError::InvalidMove`] when [`can_move`] is false;
/// callers should offer only [`moveable_tokens`].
pub fn move_token(token: &Token, roll: u8, all_tokens: &[Token]) -> Result<MoveOutcome, RulesError> {
    validate_roll(roll)?;
    if !can_move(token, roll) {
        return Err(RulesError::InvalidMove { token: token.id, roll });
    }

    let moved = if token.is_home() {
        let opened = open_token(token)?;
        debug!(token = %opened.id, cell = ?opened.position, "token opened");
        opened
    } else {
        let distance = token.distance + roll;
        if is_finished(distance) {
            debug!(token = %token.id, "token finished");
            return Ok(MoveOutcome {
                token: Token {
                    status: TokenStatus::Finished,
                    position: None,
                    distance,
                    ..*token
                },
                captured: None,
            });
        }
        token.at_distance(distance)
    };

    let captured = find_capture(&moved, all_tokens).map(|victim| {
        debug!(token = %moved.id, captured = %victim.id, cell = ?moved.position, "capture");
        send_home(victim)
    });

    Ok(MoveOutcome { token: moved, captured })
}

/// Tokens from `tokens` that can move with `roll`.
///
/// An empty result means the turn has no legal move.
#[must_use]
pub fn moveable_tokens(tokens: &[Token], roll: u8) -> Moveable {
    tokens.iter().filter(|t| can_move(t, roll)).copied().collect()
}

/// True if any token is still waiting at home.
#[must_use]
pub fn has_tokens_in_home(tokens: &[Token]) -> bool {
    tokens.iter().any(Token::is_home)
}

/// Number of finished tokens.
#[must_use]
pub fn count_finished(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| t.is_finished()).count()
}

/// Write a move's results back into a token collection.
pub fn apply_outcome<'a>(tokens: impl IntoIterator<Item = &'a mut Token>, outcome: &MoveOutcome) {
    for slot in tokens {
        if slot.id == outcome.token.id {
            *slot = outcome.token;
        } else if let Some(captured) = outcome.captured.filter(|c| c.id == slot.id) {
            *slot = captured;
        }
    }
}
