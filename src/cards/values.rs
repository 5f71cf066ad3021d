//! Point values for the 40 cards.
//!
//! The table is injected configuration: the engine and policies read it but
//! never change it. A table must cover every card exactly once, so lookups
//! by a valid [`Card`] cannot fail.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ScoponeError};

use super::card::{Card, DECK_SIZE, MAX_RANK};

/// Largest value a card or a sweep may be worth.
///
/// Keeps every score sum of a hand far inside `i64`.
pub const MAX_POINTS: i64 = 1_000_000;

/// One `(rank, suit) -> value` entry, the serialized form of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointEntry {
    pub rank: u8,
    pub suit: u8,
    pub value: i64,
}

/// Fixed point value for every card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PointEntry>", into = "Vec<PointEntry>")]
pub struct PointTable {
    values: [i64; DECK_SIZE],
}

/// Standard values, one row per suit (Ori, Coppe, Spade, Bastoni), ranks 1-10.
const STANDARD: [[i64; MAX_RANK as usize]; 4] = [
    [26, 22, 23, 24, 25, 28, 139, 20, 20, 139],
    [16, 12, 13, 14, 15, 18, 29, 10, 10, 10],
    [16, 12, 13, 14, 15, 18, 29, 10, 10, 10],
    [16, 12, 13, 14, 15, 18, 29, 10, 10, 10],
];

impl PointTable {
    /// The standard table.
    ///
    /// The 7 and 10 of Ori are the most valuable cards; Ori is worth more
    /// than the other suits throughout.
    #[must_use]
    pub fn standard() -> Self {
        let mut values = [0; DECK_SIZE];
        for card in Card::universe() {
            values[card.index()] = STANDARD[card.suit().code() as usize - 1][card.rank() as usize - 1];
        }
        Self { values }
    }

    /// Build a table from raw entries.
    ///
    /// Every one of the 40 cards must appear exactly once, with a value in
    /// `0..=MAX_POINTS`.
    pub fn from_entries(entries: impl IntoIterator<Item = PointEntry>) -> Result<Self> {
        let mut values: [Option<i64>; DECK_SIZE] = [None; DECK_SIZE];
        for entry in entries {
            let card = Card::new(entry.rank, entry.suit)?;
            let slot = &mut values[card.index()];
            if slot.is_some() {
                return Err(ScoponeError::DuplicatePointEntry { card });
            }
            if !(0..=MAX_POINTS).contains(&entry.value) {
                return Err(ScoponeError::PointValueOutOfRange {
                    card,
                    value: entry.value,
                });
            }
            *slot = Some(entry.value);
        }

        let missing = values.iter().filter(|v| v.is_none()).count();
        if missing > 0 {
            return Err(ScoponeError::IncompletePointTable { missing });
        }

        Ok(Self {
            values: values.map(|v| v.unwrap_or_default()),
        })
    }

    /// Value of a card.
    #[inline]
    #[must_use]
    pub fn value(&self, card: Card) -> i64 {
        self.values[card.index()]
    }

    /// Value of a raw `(rank, suit)` pair, failing outside the domain.
    pub fn value_of(&self, rank: u8, suit: u8) -> Result<i64> {
        Card::new(rank, suit).map(|card| self.value(card))
    }

    /// Combined value of a group of cards.
    pub fn sum<'a>(&self, cards: impl IntoIterator<Item = &'a Card>) -> i64 {
        cards.into_iter().map(|&c| self.value(c)).sum()
    }

    /// All entries in universe order.
    pub fn entries(&self) -> impl Iterator<Item = PointEntry> + '_ {
        Card::universe().map(|card| PointEntry {
            rank: card.rank(),
            suit: card.suit().code(),
            value: self.value(card),
        })
    }
}

impl Default for PointTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<PointEntry>> for PointTable {
    type Error = ScoponeError;

    fn try_from(entries: Vec<PointEntry>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<PointTable> for Vec<PointEntry> {
    fn from(table: PointTable) -> Self {
        table.entries().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: u8, suit: u8) -> Card {
        Card::new(rank, suit).unwrap()
    }

    #[test]
    fn test_standard_highlights() {
        let table = PointTable::standard();
        assert_eq!(table.value(card(7, 1)), 139);
        assert_eq!(table.value(card(10, 1)), 139);
        assert_eq!(table.value(card(7, 3)), 29);
        assert_eq!(table.value(card(8, 4)), 10);
        assert_eq!(table.value(card(1, 1)), 26);
    }

    #[test]
    fn test_value_of_outside_domain() {
        let table = PointTable::standard();
        assert_eq!(table.value_of(6, 1).unwrap(), 28);
        let err = table.value_of(11, 2).unwrap_err();
        assert_eq!(err.kind(), crate::core::ErrorKind::Configuration);
    }

    #[test]
    fn test_from_entries_requires_full_coverage() {
        let entries: Vec<_> = PointTable::standard().entries().take(39).collect();
        assert!(matches!(
            PointTable::from_entries(entries),
            Err(ScoponeError::IncompletePointTable { missing: 1 })
        ));
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let mut entries: Vec<_> = PointTable::standard().entries().collect();
        entries.push(PointEntry { rank: 1, suit: 1, value: 5 });
        assert!(matches!(
            PointTable::from_entries(entries),
            Err(ScoponeError::DuplicatePointEntry { .. })
        ));
    }

    #[test]
    fn test_from_entries_rejects_out_of_range_values() {
        let standard = PointTable::standard();
        for bad in [-1, MAX_POINTS + 1, i64::MAX] {
            let entries = standard.entries().map(|mut e| {
                if e.rank == 7 && e.suit == 1 {
                    e.value = bad;
                }
                e
            });
            let err = PointTable::from_entries(entries.collect::<Vec<_>>()).unwrap_err();
            assert!(
                matches!(err, ScoponeError::PointValueOutOfRange { value, .. } if value == bad),
                "{bad}: {err}"
            );
        }

        let mut entries: Vec<_> = PointTable::standard().entries().collect();
        entries[0].value = 0;
        entries[1].value = MAX_POINTS;
        assert!(PointTable::from_entries(entries).is_ok());
    }

    #[test]
    fn test_sum() {
        let table = PointTable::standard();
        let cards = [card(3, 1), card(4, 1)];
        assert_eq!(table.sum(&cards), 23 + 24);
    }

    #[test]
    fn test_serde_round_trip() {
        let table = PointTable::standard();
        let json = serde_json::to_string(&table).unwrap();
        let back: PointTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);

        let truncated = r#"[{"rank":1,"suit":1,"value":3}]"#;
        assert!(serde_json::from_str::<PointTable>(truncated).is_err());
    }
}
