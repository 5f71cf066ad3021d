//! Move representation: a played card plus what it captures.
//!
//! A capture is one of three cases:
//! - `Placement`: nothing is taken, the card stays on the table
//! - `Direct`: one table card of the same rank
//! - `Combination`: two or more table cards whose ranks add up to the played rank
//!
//! Consumers match on [`Capture`] exhaustively.

use serde::{Deserialize, Serialize};

use crate::cards::{rank_sum, Card, CardCombo, PointTable};

/// What a played card takes from the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capture {
    Placement,
    Direct(Card),
    Combination(CardCombo),
}

impl Capture {
    /// Build the capture for a group of table cards.
    ///
    /// An empty group is a placement and a single card is a direct capture.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        match cards {
            [] => Capture::Placement,
            [single] => Capture::Direct(*single),
            many => Capture::Combination(CardCombo::from_slice(many)),
        }
    }

    /// The captured table cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Capture::Placement => &[],
            Capture::Direct(card) => std::slice::from_ref(card),
            Capture::Combination(cards) => cards,
        }
    }

    /// Check if nothing is captured.
    #[must_use]
    pub fn is_placement(&self) -> bool {
        matches!(self, Capture::Placement)
    }

    /// Sum of the captured ranks.
    #[must_use]
    pub fn rank_sum(&self) -> u32 {
        rank_sum(self.cards())
    }

    /// Combined point value of the captured cards.
    #[must_use]
    pub fn value(&self, values: &PointTable) -> i64 {
        values.sum(self.cards())
    }
}

/// A complete move.
///
/// ## Example
///
/// ```
/// use rust_scopone::cards::Card;
/// use rust_scopone::core::{Capture, Move};
///
/// let seven = Card::new(7, 1).unwrap();
/// let three = Card::new(3, 2).unwrap();
/// let four = Card::new(4, 2).unwrap();
///
/// let place = Move::placement(seven);
/// assert!(place.capture.is_placement());
///
/// let take = Move::new(seven, Capture::from_cards(&[three, four]));
/// assert_eq!(take.capture.rank_sum(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The card played from the acting hand.
    pub card: Card,

    /// What it captures.
    pub capture: Capture,
}

impl Move {
    #[must_use]
    pub fn new(card: Card, capture: Capture) -> Self {
        Self { card, capture }
    }

    /// Play a card without capturing.
    #[must_use]
    pub fn placement(card: Card) -> Self {
        Self::new(card, Capture::Placement)
    }

    /// Points the move banks when it captures: played card plus captured cards.
    ///
    /// Zero for a placement, which banks nothing.
    #[must_use]
    pub fn take_value(&self, values: &PointTable) -> i64 {
        if self.capture.is_placement() {
            0
        } else {
            values.value(self.card) + self.capture.value(values)
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.capture {
            Capture::Placement => write!(f, "play {}", self.card),
            Capture::Direct(target) => write!(f, "{} takes {}", self.card, target),
            Capture::Combination(cards) => {
                write!(f, "{} takes ", self.card)?;
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: u8, suit: u8) -> Card {
        Card::new(rank, suit).unwrap()
    }

    #[test]
    fn test_capture_from_cards() {
        assert_eq!(Capture::from_cards(&[]), Capture::Placement);
        assert_eq!(Capture::from_cards(&[card(5, 1)]), Capture::Direct(card(5, 1)));

        let combo = Capture::from_cards(&[card(2, 1), card(3, 1)]);
        assert!(matches!(combo, Capture::Combination(ref c) if c.len() == 2));
        assert_eq!(combo.rank_sum(), 5);
    }

    #[test]
    fn test_take_value() {
        let values = PointTable::standard();
        let mv = Move::new(card(7, 1), Capture::from_cards(&[card(3, 1), card(4, 1)]));
        assert_eq!(mv.take_value(&values), 139 + 23 + 24);
        assert_eq!(Move::placement(card(7, 1)).take_value(&values), 0);
    }

    #[test]
    fn test_move_equality_and_hash() {
        use rustc_hash::FxHashSet;

        let a = Move::new(card(5, 1), Capture::Direct(card(5, 2)));
        let b = Move::new(card(5, 1), Capture::Direct(card(5, 2)));
        let c = Move::new(card(5, 1), Capture::Direct(card(5, 3)));

        let set: FxHashSet<Move> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_display() {
        let mv = Move::new(card(7, 1), Capture::from_cards(&[card(3, 2), card(4, 2)]));
        assert_eq!(mv.to_string(), "7 of Ori takes 3 of Coppe + 4 of Coppe");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(card(6, 2), Capture::from_cards(&[card(1, 1), card(5, 4)]));
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
