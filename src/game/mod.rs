//! Playing a whole game.
//!
//! `LudoGame` strings the rules together: it gates rolls through the turn
//! manager, offers the moveable tokens, applies the chosen move and any
//! capture, recomputes standings, and decides who rolls next.

mod session;

pub use session::LudoGame;
