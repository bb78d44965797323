//! Token identity and state.

use serde::{Deserialize, Serialize};

use crate::board::{absolute_position, FINISH_DISTANCE, TOKENS_PER_PLAYER};
use crate::core::PlayerColor;

/// Identifies one of the 16 tokens: owner plus index in [0, 4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId {
    pub player: PlayerColor,
    pub index: u8,
}

impl TokenId {
    #[must_use]
    pub const fn new(player: PlayerColor, index: u8) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.player, self.index)
    }
}

/// Where a token is in its life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    /// Waiting off the board for a 6.
    Home,
    /// On the shared track or in the finish lane.
    Active,
    /// Completed the course.
    Finished,
}

/// A single token.
///
/// `distance` is the authoritative progress counter. `position` is the
/// absolute track cell and is `None` at home, in the finish lane, and once
/// finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub status: TokenStatus,
    pub position: Option<u8>,
    pub distance: u8,
}

impl Token {
    /// Create a token at home.
    #[must_use]
    pub const fn new(player: PlayerColor, index: u8) -> Self {
        Self {
            id: TokenId::new(player, index),
            status: TokenStatus::Home,
            position: None,
            distance: 0,
        }
    }

    /// Owner of this token.
    #[must_use]
    pub const fn player(&self) -> PlayerColor {
        self.id.player
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.status == TokenStatus::Home
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == TokenStatus::Active
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == TokenStatus::Finished
    }

    /// Cells still to cover before finishing.
    #[must_use]
    pub const fn distance_to_finish(&self) -> u8 {
        FINISH_DISTANCE.saturating_sub(self.distance)
    }

    /// Same token, active at `distance`, with its track cell recomputed.
    #[must_use]
    pub(crate) fn at_distance(self, distance: u8) -> Self {
        Self {
            status: TokenStatus::Active,
            position: absolute_position(self.player(), distance),
            distance,
            ..self
        }
    }
}

/// Four home tokens for each listed player.
#[must_use]
pub fn initial_tokens(players: &[PlayerColor]) -> Vec<Token> {
    players
        .iter()
        .flat_map(|&player| (0..TOKENS_PER_PLAYER as u8).map(move |i| Token::new(player, i)))
        .collect()
}

/// Result of a successful move.
///
/// Holds every token the move touched: the mover and, when it captured,
/// the opponent now back at home.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub token: Token,
    pub captured: Option<Token>,
}

impl MoveOutcome {
    #[must_use]
    pub fn did_capture(&self) -> bool {
        self.captured.is_some()
    }
}
