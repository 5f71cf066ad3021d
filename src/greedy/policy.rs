//! Single-ply greedy move choice.
//!
//! Priority, first match wins:
//! 1. Sweep: a card whose rank equals the rank sum of the whole table. The
//!    highest-valued such card takes everything.
//! 2. Capture: each card keeps one capture (its first direct match, else its
//!    most valuable combination); the card banking the most points is played.
//! 3. Placement: the lowest-valued card goes to the table.
//!
//! Ties always go to the card (or combination) enumerated first. There is no
//! randomness anywhere in this module.

use tracing::{event, Level};

use crate::cards::{rank_sum, Card, CombinationIndex, PointTable};
use crate::core::{Capture, GameState, Move};

/// Chooses moves for the seats the search agent does not control.
///
/// Implementations must be deterministic: the search relies on it to build
/// one macro-child per first move.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a move for the active seat.
    ///
    /// Returns `None` if the active hand is empty.
    fn choose_move(&self, state: &GameState, values: &PointTable) -> Option<Move>;
}

/// Why the greedy policy picked its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GreedyReason {
    Sweep,
    Capture,
    Placement,
}

/// The fixed-priority heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Choose a move for `hand` against `table`.
    ///
    /// ```
    /// use rust_scopone::cards::{Card, PointTable};
    /// use rust_scopone::greedy::GreedyPolicy;
    ///
    /// let seven = Card::new(7, 1).unwrap();
    /// let table = [Card::new(3, 2).unwrap(), Card::new(4, 3).unwrap()];
    ///
    /// let mv = GreedyPolicy.choose(&[seven], &table, &PointTable::standard()).unwrap();
    /// assert_eq!(mv.card, seven);
    /// assert_eq!(mv.capture.cards(), &table);
    /// ```
    #[must_use]
    pub fn choose(&self, hand: &[Card], table: &[Card], values: &PointTable) -> Option<Move> {
        self.decide(hand, table, values).map(|(mv, _)| mv)
    }

    /// Like [`choose`](Self::choose), also reporting which rule fired.
    #[must_use]
    pub fn decide(
        &self,
        hand: &[Card],
        table: &[Card],
        values: &PointTable,
    ) -> Option<(Move, GreedyReason)> {
        if let Some(mv) = sweep(hand, table, values) {
            return Some((mv, GreedyReason::Sweep));
        }
        if let Some(mv) = best_capture(hand, table, values) {
            return Some((mv, GreedyReason::Capture));
        }
        cheapest_placement(hand, values).map(|mv| (mv, GreedyReason::Placement))
    }
}

impl OpponentPolicy for GreedyPolicy {
    fn choose_move(&self, state: &GameState, values: &PointTable) -> Option<Move> {
        let hand: Vec<Card> = state.active_hand().iter().copied().collect();
        let table: Vec<Card> = state.table().iter().copied().collect();

        let (mv, reason) = self.decide(&hand, &table, values)?;
        log_decision(state, &mv, reason, values);
        Some(mv)
    }
}

fn sweep(hand: &[Card], table: &[Card], values: &PointTable) -> Option<Move> {
    if table.is_empty() {
        return None;
    }
    let total = rank_sum(table);

    let mut best: Option<Card> = None;
    for &card in hand.iter().filter(|c| u32::from(c.rank()) == total) {
        if best.map_or(true, |b| values.value(card) > values.value(b)) {
            best = Some(card);
        }
    }
    best.map(|card| Move::new(card, Capture::from_cards(table)))
}

fn best_capture(hand: &[Card], table: &[Card], values: &PointTable) -> Option<Move> {
    let index = CombinationIndex::build(table);

    let mut best: Option<(i64, Move)> = None;
    for &card in hand {
        let capture = match table.iter().find(|t| t.rank() == card.rank()) {
            Some(&direct) => Capture::Direct(direct),
            None => {
                let mut top: Option<(i64, &[Card])> = None;
                for combo in index.summing_to(card.rank()) {
                    let value = values.sum(combo.iter());
                    if top.map_or(true, |(v, _)| value > v) {
                        top = Some((value, combo.as_slice()));
                    }
                }
                match top {
                    Some((_, cards)) => Capture::from_cards(cards),
                    None => continue,
                }
            }
        };

        let mv = Move::new(card, capture);
        let take = mv.take_value(values);
        if best.as_ref().map_or(true, |(v, _)| take > *v) {
            best = Some((take, mv));
        }
    }
    best.map(|(_, mv)| mv)
}

fn cheapest_placement(hand: &[Card], values: &PointTable) -> Option<Move> {
    let mut cheapest: Option<Card> = None;
    for &card in hand {
        if cheapest.map_or(true, |c| values.value(card) < values.value(c)) {
            cheapest = Some(card);
        }
    }
    cheapest.map(Move::placement)
}

fn log_decision(state: &GameState, mv: &Move, reason: GreedyReason, values: &PointTable) {
    if !tracing::enabled!(Level::TRACE) {
        return;
    }

    event!(
        target: "rust_scopone::greedy",
        Level::TRACE,
        seat = %state.active(),
        hand_size = state.active_hand().len(),
        table_size = state.table().len(),
        reason = ?reason,
        take = mv.take_value(values),
        chosen = %mv,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn card(rank: u8, suit: u8) -> Card {
        Card::new(rank, suit).unwrap()
    }

    fn values() -> PointTable {
        PointTable::standard()
    }

    #[test]
    fn test_sweep_beats_bigger_capture() {
        // The 7 of Ori is worth far more, but only the 5 clears the table.
        let hand = [card(7, 1), card(5, 2)];
        let table = [card(2, 3), card(3, 3)];
        let (mv, reason) = GreedyPolicy.decide(&hand, &table, &values()).unwrap();

        assert_eq!(reason, GreedyReason::Sweep);
        assert_eq!(mv.card, card(5, 2));
        assert_eq!(mv.capture, Capture::from_cards(&table));
    }

    #[test]
    fn test_sweep_prefers_highest_value_card() {
        let hand = [card(7, 2), card(7, 1), card(7, 3)];
        let table = [card(3, 1), card(4, 1)];
        let mv = GreedyPolicy.choose(&hand, &table, &values()).unwrap();
        assert_eq!(mv.card, card(7, 1));
    }

    #[test]
    fn test_single_card_sweep_is_direct() {
        let hand = [card(4, 2)];
        let table = [card(4, 1)];
        let mv = GreedyPolicy.choose(&hand, &table, &values()).unwrap();
        assert_eq!(mv.capture, Capture::Direct(card(4, 1)));
    }

    #[test]
    fn test_direct_match_preferred_over_combination() {
        // 6 of Coppe: direct 6 of Spade (18), or 1+5 of Ori (26+25).
        let hand = [card(6, 2)];
        let table = [card(6, 3), card(1, 1), card(5, 1), card(9, 4)];
        let mv = GreedyPolicy.choose(&hand, &table, &values()).unwrap();
        assert_eq!(mv.capture, Capture::Direct(card(6, 3)));
    }

    #[test]
    fn test_most_valuable_combination_kept() {
        // 8 of Spade: 3+5 of Coppe (13+15) or 2+6 of Ori (22+28).
        let hand = [card(8, 3)];
        let table = [card(3, 2), card(5, 2), card(2, 1), card(6, 1)];
        let mv = GreedyPolicy.choose(&hand, &table, &values()).unwrap();
        assert_eq!(mv.capture, Capture::from_cards(&[card(2, 1), card(6, 1)]));
    }

    #[test]
    fn test_highest_take_wins() {
        let hand = [card(2, 2), card(9, 2)];
        let table = [card(2, 1), card(9, 1), card(10, 3)];
        let (mv, reason) = GreedyPolicy.decide(&hand, &table, &values()).unwrap();
        assert_eq!(reason, GreedyReason::Capture);
        // 2: 12 + 22 = 34. 9: 10 + 20 = 30.
        assert_eq!(mv.card, card(2, 2));
    }

    #[test]
    fn test_equal_takes_go_to_first_card() {
        let hand = [card(4, 3), card(4, 2)];
        let table = [card(4, 4), card(9, 1)];
        for _ in 0..5 {
            let mv = GreedyPolicy.choose(&hand, &table, &values()).unwrap();
            assert_eq!(mv.card, card(4, 3));
        }
    }

    #[test]
    fn test_cheapest_placement() {
        let hand = [card(7, 1), card(8, 2), card(9, 3)];
        let table = [card(10, 1)];
        let (mv, reason) = GreedyPolicy.decide(&hand, &table, &values()).unwrap();
        assert_eq!(reason, GreedyReason::Placement);
        assert_eq!(mv, Move::placement(card(8, 2)));
    }

    #[test]
    fn test_empty_hand() {
        assert!(GreedyPolicy.choose(&[], &[card(1, 1)], &values()).is_none());
    }

    #[test]
    fn test_opponent_policy_uses_active_hand() {
        let state = GameState::new(
            PlayerId::wrapping(1),
            [vec![card(1, 1)], vec![card(3, 2)], vec![], vec![]],
            vec![card(1, 2), card(2, 2)],
            vec![],
        )
        .unwrap();

        let mv = GreedyPolicy.choose_move(&state, &values()).unwrap();
        assert_eq!(mv.card, card(3, 2));
        assert_eq!(mv.capture.cards().len(), 2);
    }
}
