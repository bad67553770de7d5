//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A duel always has exactly two seats: `PlayerId::ONE` moves first and
//! `PlayerId::TWO` answers. `opponent()` flips between them.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`. `split_mut` hands out the
//! acting player's slot and the opponent's slot at the same time, which is
//! how effects and combat borrow both sides of the board for one call.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier in a two-player duel.
///
/// Indices are 0-based: the first player has index 0. Only `ONE` and `TWO`
/// exist; deserializing any other index fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

/// A seat index other than 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no player with index {0}")]
pub struct InvalidPlayer(pub u8);

impl PlayerId {
    /// The player who takes the first turn.
    pub const ONE: PlayerId = PlayerId(0);
    /// The player who takes the second turn.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "a duel has exactly two players");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayer;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if id < 2 {
            Ok(Self(id))
        } else {
            Err(InvalidPlayer(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data with one slot for each seat.
///
/// ## Example
///
/// ```
/// use manaforge::core::{PlayerId, PlayerMap};
///
/// let mut hp: PlayerMap<i32> = PlayerMap::new(|_| 15);
/// hp[PlayerId::TWO] -= 4;
///
/// let (me, them) = hp.split_mut(PlayerId::ONE);
/// *me += *them;
/// assert_eq!(hp[PlayerId::ONE], 26);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Build both slots from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Build from explicit values for player one and player two.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow `player`'s slot and the opponent's slot mutably at once.
    ///
    /// Returns `(player, opponent)`.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        if player == PlayerId::ONE {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
