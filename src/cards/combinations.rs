//! Capture-combination enumeration.
//!
//! A played card can take any group of two or more table cards whose ranks
//! add up to its own rank. Since ranks are 1-10, only groups summing to at most
//! 10 ever matter, so the index keeps one bucket per sum.
//!
//! Groups are listed by size, then lexicographically by table position, which
//! keeps every consumer's tie-breaking stable for a given table order.

use smallvec::SmallVec;

use super::card::{rank_sum, Card, MAX_RANK};

/// A group of table cards taken together.
///
/// Four inline slots cover almost every real table without allocating.
pub type CardCombo = SmallVec<[Card; 4]>;

/// All multi-card groups of a table, bucketed by rank sum.
#[derive(Clone, Debug, Default)]
pub struct CombinationIndex {
    by_sum: [Vec<CardCombo>; MAX_RANK as usize + 1],
}

impl CombinationIndex {
    /// Enumerate every group of two or more `cards` whose ranks sum to 10 or less.
    #[must_use]
    pub fn build(cards: &[Card]) -> Self {
        let mut index = Self::default();
        let mut current = CardCombo::new();

        for size in 2..=cards.len() {
            if smallest_sum(cards, size) > u32::from(MAX_RANK) {
                break;
            }
            collect(cards, size, 0, 0, &mut current, &mut index.by_sum);
        }

        index
    }

    /// Groups whose ranks sum exactly to `rank`.
    #[must_use]
    pub fn summing_to(&self, rank: u8) -> &[CardCombo] {
        self.by_sum
            .get(rank as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of groups in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_sum.iter().map(Vec::len).sum()
    }

    /// Check if the table has no multi-card group at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every group of two or more `cards` that sums exactly to `rank`.
#[must_use]
pub fn combinations_summing_to(cards: &[Card], rank: u8) -> Vec<CardCombo> {
    CombinationIndex::build(cards).summing_to(rank).to_vec()
}

fn smallest_sum(cards: &[Card], size: usize) -> u32 {
    let mut ranks: SmallVec<[u8; 16]> = cards.iter().map(|c| c.rank()).collect();
    ranks.sort_unstable();
    ranks.iter().take(size).map(|&r| u32::from(r)).sum()
}

fn collect(
    cards: &[Card],
    size: usize,
    start: usize,
    sum: u32,
    current: &mut CardCombo,
    out: &mut [Vec<CardCombo>; MAX_RANK as usize + 1],
) {
    if current.len() == size {
        debug_assert_eq!(sum, rank_sum(current.iter()));
        out[sum as usize].push(current.clone());
        return;
    }

    let needed = size - current.len();
    for i in start..=cards.len().saturating_sub(needed) {
        let next = sum + u32::from(cards[i].rank());
        if next > u32::from(MAX_RANK) {
            continue;
        }
        current.push(cards[i]);
        collect(cards, size, i + 1, next, current, out);
        current.pop();
    }
}
