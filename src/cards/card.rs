//! Cards of the 40-card Italian deck.
//!
//! A card is a rank in 1-10 and one of four suits. Cards are plain values:
//! equality, ordering and hashing all go through `(rank, suit)`.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ScoponeError};

/// Highest rank in the deck.
pub const MAX_RANK: u8 = 10;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 40;

/// The four Italian suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Ori = 1,
    Coppe = 2,
    Spade = 3,
    Bastoni = 4,
}

impl Suit {
    /// All suits in numeric order.
    pub const ALL: [Suit; 4] = [Suit::Ori, Suit::Coppe, Suit::Spade, Suit::Bastoni];

    /// Parse the numeric suit code (1-4).
    pub fn from_code(code: u8) -> Option<Suit> {
        match code {
            1 => Some(Suit::Ori),
            2 => Some(Suit::Coppe),
            3 => Some(Suit::Spade),
            4 => Some(Suit::Bastoni),
            _ => None,
        }
    }

    /// Numeric suit code (1-4).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Ori => "Ori",
            Suit::Coppe => "Coppe",
            Suit::Spade => "Spade",
            Suit::Bastoni => "Bastoni",
        };
        f.write_str(name)
    }
}

/// A single card.
///
/// ```
/// use rust_scopone::cards::{Card, Suit};
///
/// let settebello = Card::new(7, 1).unwrap();
/// assert_eq!(settebello.rank(), 7);
/// assert_eq!(settebello.suit(), Suit::Ori);
/// assert!(Card::new(11, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard", into = "RawCard")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

/// Wire form of a card: numeric rank and suit code, validated on the way in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawCard {
    rank: u8,
    suit: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = ScoponeError;

    fn try_from(raw: RawCard) -> Result<Self> {
        Card::new(raw.rank, raw.suit)
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        RawCard {
            rank: card.rank,
            suit: card.suit.code(),
        }
    }
}

impl Card {
    /// Create a card from its numeric rank (1-10) and suit code (1-4).
    pub fn new(rank: u8, suit: u8) -> Result<Self> {
        match Suit::from_code(suit) {
            Some(suit) if (1..=MAX_RANK).contains(&rank) => Ok(Self { rank, suit }),
            _ => Err(ScoponeError::CardOutOfDomain { rank, suit }),
        }
    }

    /// Create a card from a rank and a typed suit.
    pub fn of(rank: u8, suit: Suit) -> Result<Self> {
        Self::new(rank, suit.code())
    }

    /// The card's rank (1-10).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The card's suit.
    #[inline]
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Position of this card in the universe, 0-39.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.suit.code() as usize - 1) * MAX_RANK as usize + (self.rank as usize - 1)
    }

    /// Iterate over all 40 cards, suit by suit.
    pub fn universe() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| (1..=MAX_RANK).map(move |rank| Card { rank, suit }))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Sum of the ranks of a group of cards.
pub fn rank_sum<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    cards.into_iter().map(|c| u32::from(c.rank())).sum()
}
