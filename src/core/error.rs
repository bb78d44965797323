//! Rule violation errors.
//!
//! Every variant describes a caller mistake. A failed operation leaves its
//! inputs untouched, so the caller can discard the attempt and keep playing.

use super::player::PlayerColor;
use crate::tokens::TokenId;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Dice value outside [1, 6].
    #[error("invalid dice value: {0}")]
    InvalidRoll(u8),

    /// The token cannot move with this roll.
    #[error("invalid move: {token} cannot move {roll}")]
    InvalidMove { token: TokenId, roll: u8 },

    /// Only tokens waiting at home can be opened.
    #[error("token {0} is not at home")]
    TokenNotHome(TokenId),

    /// The token belongs to someone other than the acting player.
    #[error("token {token} does not belong to {current}")]
    NotYourToken { token: TokenId, current: PlayerColor },

    /// The token is not part of this game.
    #[error("unknown token: {0}")]
    UnknownToken(TokenId),

    /// A roll is waiting to be spent on a move.
    #[error("a roll is already pending")]
    RollPending,

    /// Moving requires a roll first.
    #[error("no roll is pending")]
    NoRollPending,

    /// The turn manager does not allow a roll right now.
    #[error("rolling is not allowed")]
    CannotRoll,

    /// The game has ended.
    #[error("game is over")]
    GameOver,

    /// The seat list for a new game is unusable.
    #[error("invalid players: {0}")]
    InvalidPlayers(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let token = TokenId::new(PlayerColor::Blue, 2);

        assert_eq!(RulesError::InvalidRoll(7).to_string(), "invalid dice value: 7");
        assert_eq!(
            RulesError::InvalidMove { token, roll: 4 }.to_string(),
            "invalid move: blue-2 cannot move 4"
        );
        assert_eq!(
            RulesError::NotYourToken { token, current: PlayerColor::Red }.to_string(),
            "token blue-2 does not belong to red"
        );
    }
}
