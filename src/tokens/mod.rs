//! Tokens and their movement rules.
//!
//! A token goes `Home -> Active -> Finished`, and can be knocked back from
//! `Active` to `Home` by a capture. No other transition exists.
//!
//! ## Capture
//!
//! A token landing on a non-safe track cell held by an active opponent
//! sends that opponent home. Own tokens share cells freely. Only the first
//! matching opponent is captured.

mod token;
mod movement;

pub use token::{initial_tokens, MoveOutcome, Token, TokenId, TokenStatus};
pub use movement::{
    apply_outcome, can_move, count_finished, find_capture, has_tokens_in_home, move_token,
    moveable_tokens, open_token, send_home, Moveable,
};
