//! Player colors and per-player data storage.
//!
//! ## PlayerColor
//!
//! The four seats of a Ludo board. The declaration order is the fixed cyclic
//! order used for turn rotation, and each color owns an 18-cell quadrant of
//! the shared track.
//!
//! ## PlayerMap
//!
//! Per-color data storage backed by a fixed array for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::QUADRANT_LENGTH;

/// One of the four player seats, in cyclic turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    /// All colors in cyclic order.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];

    /// Position in the cyclic order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at a cyclic index, wrapping past the last seat.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The color that follows this one in the fixed cyclic order.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Cell on the shared track where this color's tokens enter play.
    #[must_use]
    pub const fn start_offset(self) -> u8 {
        self.index() as u8 * QUADRANT_LENGTH
    }

    /// Lowercase name, as used in token identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color data storage with O(1) access.
///
/// Always holds one entry per seat, whether or not that seat is playing.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{PlayerColor, PlayerMap};
///
/// let mut captures: PlayerMap<u32> = PlayerMap::with_value(0);
/// captures[PlayerColor::Green] += 1;
/// assert_eq!(captures[PlayerColor::Green], 1);
/// assert_eq!(captures[PlayerColor::Red], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 4],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            data: PlayerColor::ALL.map(factory),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's entry.
    #[must_use]
    pub fn get(&self, player: PlayerColor) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a color's entry.
    pub fn get_mut(&mut self, player: PlayerColor) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerColor, &T) pairs in cyclic order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        PlayerColor::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerColor> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerColor) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerColor> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerColor) -> &mut Self::Output {
        self.get_mut(player)
    }
}
