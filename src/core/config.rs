//! Game configuration.
//!
//! `GameConfig` carries the knobs a host application sets when it starts a
//! game. `GameMode` maps the menu choice to the participating seats.

use serde::{Deserialize, Serialize};

use super::player::PlayerColor;
use super::rng::GameRng;
use crate::ai::Difficulty;

/// How many seats are in play, and how many of them are human.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One human (red) against one AI opponent.
    OnePlayer,
    TwoPlayer,
    ThreePlayer,
    FourPlayer,
}

impl GameMode {
    /// Seats taking part, in turn order.
    #[must_use]
    pub fn players(self) -> Vec<PlayerColor> {
        let count = match self {
            GameMode::OnePlayer | GameMode::TwoPlayer => 2,
            GameMode::ThreePlayer => 3,
            GameMode::FourPlayer => 4,
        };
        PlayerColor::ALL[..count].to_vec()
    }
}

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Keep playing for the remaining placements once someone has won.
    pub continue_after_winner: bool,

    /// Seed for the dice RNG.
    /// Same seed produces the same sequence of rolls.
    pub seed: u64,

    /// Strength of computer-controlled seats.
    pub ai_difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            continue_after_winner: true,
            seed: 42,
            ai_difficulty: Difficulty::Medium,
        }
    }
}

impl GameConfig {
    /// Set whether play continues after the first winner.
    #[must_use]
    pub fn with_continue_after_winner(mut self, continue_after_winner: bool) -> Self {
        self.continue_after_winner = continue_after_winner;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the AI difficulty.
    #[must_use]
    pub fn with_ai_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.ai_difficulty = difficulty;
        self
    }

    /// Build the dice RNG for this configuration.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }
}
