//! # ludo-engine
//!
//! Deterministic rules engine for Ludo with two to four players, human or AI.
//!
//! ## Design Principles
//!
//! 1. **Values In, Values Out**: Every operation takes the current tokens or
//!    turn state and returns a new one. Nothing is mutated in place, so AI
//!    previews and what-if checks cannot leak into the real game.
//!
//! 2. **Synchronous**: No timers, no blocking. Pacing for animations or AI
//!    "thinking" belongs to the caller.
//!
//! 3. **Fail Loudly**: Illegal moves and malformed input return
//!    `RulesError` rather than being coerced into something legal.
//!
//! ## Modules
//!
//! - `core`: Player colors, RNG, configuration, errors
//! - `dice`: Die generation and roll predicates
//! - `board`: Track geometry and position arithmetic
//! - `tokens`: Token state, movement and captures
//! - `rules`: Turn rotation and win detection
//! - `ai`: Move selection for computer players
//! - `game`: A full game session driving all of the above

pub mod core;
pub mod dice;
pub mod board;
pub mod tokens;
pub mod rules;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameMode, GameRng, PlayerColor, PlayerMap, RulesError};

pub use crate::tokens::{MoveOutcome, Token, TokenId, TokenStatus};

pub use crate::rules::{PlayerResult, TurnState, WinState};

pub use crate::ai::{Difficulty, MovePolicy, PriorityPolicy, RandomPolicy};

pub use crate::game::LudoGame;
