//! Core engine types: players, RNG, configuration, errors.
//!
//! These are shared by every rules component. Nothing here knows about
//! token movement or turn order.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerColor, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, GameMode};
pub use error::RulesError;
