//! Game rules above the single move: turn order and win detection.
//!
//! - `turn`: whose roll it is, six streaks, extra rolls, round counting
//! - `win`: finished-token standings, winner and game-over checks

pub mod turn;
pub mod win;

pub use turn::{next_player, TurnState};
pub use win::{
    can_win_this_turn, compute_result, compute_win_state, has_won, should_continue,
    winners_in_order, PlayerResult, WinState,
};
