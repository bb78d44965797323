//! Move selection policies for computer-controlled seats.
//!
//! Policies are trait-based to allow customization:
//! - `RandomPolicy`: any legal token, uniformly
//! - `PriorityPolicy`: heuristic scoring, random among the best `top_k`

use serde::{Deserialize, Serialize};

use crate::board::TRACK_LENGTH;
use crate::core::{GameMode, GameRng, PlayerColor};
use crate::tokens::{move_token, moveable_tokens, Token};

/// Policy for choosing which token to move.
pub trait MovePolicy {
    /// Pick one of `candidates`, all of which can legally move with `roll`.
    ///
    /// Returns `None` only when `candidates` is empty.
    fn choose(
        &self,
        candidates: &[Token],
        roll: u8,
        all_tokens: &[Token],
        rng: &mut GameRng,
    ) -> Option<Token>;
}

/// Uniformly random choice.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(
        &self,
        candidates: &[Token],
        _roll: u8,
        _all_tokens: &[Token],
        rng: &mut GameRng,
    ) -> Option<Token> {
        rng.choose(candidates).copied()
    }
}

/// Heuristic choice: score every candidate, then pick randomly among the
/// `top_k` highest. `top_k == 1` is fully greedy.
#[derive(Clone, Debug)]
pub struct PriorityPolicy {
    pub top_k: usize,
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self { top_k: 1 }
    }
}

impl MovePolicy for PriorityPolicy {
    fn choose(
        &self,
        candidates: &[Token],
        roll: u8,
        all_tokens: &[Token],
        rng: &mut GameRng,
    ) -> Option<Token> {
        let mut scored: Vec<(Token, i32)> = candidates
            .iter()
            .map(|t| (*t, token_priority(t, roll, all_tokens)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(self.top_k.max(1));

        rng.choose(&scored).map(|(token, _)| *token)
    }
}

/// AI strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Random legal move.
    Easy,
    /// One of the two best-scoring moves.
    Medium,
    /// Always the best-scoring move.
    Hard,
}

impl Difficulty {
    /// Policy implementing this difficulty.
    #[must_use]
    pub fn policy(self) -> Box<dyn MovePolicy> {
        match self {
            Difficulty::Easy => Box::new(RandomPolicy),
            Difficulty::Medium => Box::new(PriorityPolicy { top_k: 2 }),
            Difficulty::Hard => Box::new(PriorityPolicy { top_k: 1 }),
        }
    }
}

/// Heuristic score for moving `token` with `roll`; higher is better.
///
/// Rewards leaving home, closing in on the finish, capturing, pushing
/// stragglers, and escaping an opponent within striking range behind.
#[must_use]
pub fn token_priority(token: &Token, roll: u8, all_tokens: &[Token]) -> i32 {
    let mut priority = 0;

    if token.is_home() {
        priority += 10;
    }

    if token.is_active() && token.distance >= 45 {
        priority += 20 + i32::from(token.distance - 45);
    }

    let captures = move_token(token, roll, all_tokens).is_ok_and(|outcome| outcome.did_capture());
    if captures {
        priority += 30;
    }

    if token.is_active() && token.distance < 20 {
        priority += 5;
    }

    if token.is_active() && is_threatened(token, all_tokens) {
        priority += 8;
    }

    priority
}

/// An active opponent sits 1-6 cells behind `token` on the shared track.
fn is_threatened(token: &Token, all_tokens: &[Token]) -> bool {
    let Some(position) = token.position else {
        return false;
    };

    all_tokens.iter().any(|other| {
        other.player() != token.player()
            && other.is_active()
            && other.position.is_some_and(|theirs| {
                let gap = (position + TRACK_LENGTH - theirs) % TRACK_LENGTH;
                (1..=6).contains(&gap)
            })
    })
}

/// Choose a token for a computer player, or `None` when nothing can move.
pub fn select_move(
    player_tokens: &[Token],
    roll: u8,
    all_tokens: &[Token],
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<Token> {
    let candidates = moveable_tokens(player_tokens, roll);
    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        _ => difficulty.policy().choose(&candidates, roll, all_tokens, rng),
    }
}

/// Seats played by the computer: in one-player mode, everyone but red.
#[must_use]
pub fn is_ai_player(player: PlayerColor, mode: GameMode) -> bool {
    mode == GameMode::OnePlayer && player != PlayerColor::Red
}
