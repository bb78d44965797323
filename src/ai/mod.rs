//! Computer opponents.
//!
//! Strategy only: the AI reads the same token state as a human and drives
//! the same engine calls. Nothing in the rules depends on this module.

mod policy;

pub use policy::{
    is_ai_player, select_move, token_priority, Difficulty, MovePolicy, PriorityPolicy,
    RandomPolicy,
};
