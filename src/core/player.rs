//! Seat identification, teams, and per-seat/per-team storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the four seats at the table. Seats play in
//! ascending order and wrap around: 0, 1, 2, 3, 0, ...
//!
//! ## Team
//!
//! Partners sit opposite each other. Seats 0 and 2 form [`Team::Hand`] (the
//! side holding the opening lead), seats 1 and 3 form [`Team::Deck`] (the side
//! holding the dealer, who plays last).
//!
//! ## PlayerMap / TeamMap
//!
//! Fixed-size storage backed by arrays for O(1) access, indexed by
//! `PlayerId` and `Team` respectively.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{Result, ScoponeError};

/// Number of seats at the table.
pub const SEATS: usize = 4;

/// Seat identifier (0-3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a seat ID, rejecting anything outside 0-3.
    pub fn new(seat: u8) -> Result<Self> {
        if (seat as usize) < SEATS {
            Ok(Self(seat))
        } else {
            Err(ScoponeError::InvalidSeat { seat })
        }
    }

    /// Create a seat ID from a value already known to be in range.
    ///
    /// The value is reduced modulo the seat count.
    #[must_use]
    pub const fn wrapping(seat: u8) -> Self {
        Self(seat % SEATS as u8)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::wrapping(self.0 + 1)
    }

    /// The team this seat belongs to.
    #[must_use]
    pub const fn team(self) -> Team {
        if self.0 % 2 == 0 {
            Team::Hand
        } else {
            Team::Deck
        }
    }

    /// Iterate over all seats in playing order.
    ///
    /// ```
    /// use rust_scopone::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3].index(), 3);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEATS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One of the two partnerships.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Seats 0 and 2.
    Hand,
    /// Seats 1 and 3, including the dealer.
    Deck,
}

impl Team {
    /// Both teams, `Hand` first.
    pub const ALL: [Team; 2] = [Team::Hand, Team::Deck];

    /// The other partnership.
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::Hand => Team::Deck,
            Team::Deck => Team::Hand,
        }
    }

    const fn index(self) -> usize {
        match self {
            Team::Hand => 0,
            Team::Deck => 1,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Hand => write!(f, "Hand"),
            Team::Deck => write!(f, "Deck"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_scopone::core::{PlayerId, PlayerMap};
///
/// let mut played: PlayerMap<u32> = PlayerMap::with_value(0);
/// played[PlayerId::wrapping(1)] += 1;
/// assert_eq!(played[PlayerId::wrapping(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; SEATS],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Per-team data storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            data: [factory(Team::Hand), factory(Team::Deck)],
        }
    }

    /// Iterate over (Team, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        &self.data[team.index()]
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        &mut self.data[team.index()]
    }
}
