//! Scopone rules: legal moves, transitions, and end-of-hand scoring.
//!
//! The engine owns the immutable [`GameConfig`] and turns states into new
//! states. It never mutates its input: every transition works on a clone.
//!
//! ## Transition summary
//!
//! - Placement: the card goes from the hand to the table.
//! - Capture: the card and the captured cards go to the team's pile, and the
//!   team scores their combined value. Clearing the table earns the sweep
//!   bonus unless the move ends the hand.
//! - Every move passes the turn to the next seat.
//! - The move that ends the hand also settles the table: leftovers go to the
//!   team of the last capturing seat, or to the configured fallback.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use crate::cards::{Card, CombinationIndex, PointTable, DECK_SIZE};
use crate::core::{
    Capture, GameConfig, GameRng, GameState, Move, PlayerId, Result, ScoponeError, MAX_HAND_SIZE,
};

/// Capture options for each card of the active hand, in hand order.
///
/// A card with no options can only be placed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalCaptures {
    entries: Vec<(Card, SmallVec<[Capture; 4]>)>,
}

impl LegalCaptures {
    /// Capture options for a card, or `None` if it is not in the hand.
    #[must_use]
    pub fn get(&self, card: Card) -> Option<&[Capture]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == card)
            .map(|(_, captures)| captures.as_slice())
    }

    /// Iterate over (card, options) pairs in hand order.
    pub fn iter(&self) -> impl Iterator<Item = (Card, &[Capture])> {
        self.entries.iter().map(|(c, caps)| (*c, caps.as_slice()))
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a move is one of the options listed here.
    #[must_use]
    pub fn allows(&self, mv: &Move) -> bool {
        match self.get(mv.card) {
            Some([]) => mv.capture.is_placement(),
            Some(options) => options.contains(&mv.capture),
            None => false,
        }
    }
}

/// Enumerate the capture options of every card in `hand` against `table`.
///
/// Direct matches come first in table order, then combinations in
/// [`CombinationIndex`] order.
#[must_use]
pub fn enumerate_captures(hand: &[Card], table: &[Card]) -> LegalCaptures {
    let index = CombinationIndex::build(table);

    let entries = hand
        .iter()
        .map(|&card| {
            let mut options: SmallVec<[Capture; 4]> = table
                .iter()
                .filter(|t| t.rank() == card.rank())
                .map(|&t| Capture::Direct(t))
                .collect();
            options.extend(
                index
                    .summing_to(card.rank())
                    .iter()
                    .map(|combo| Capture::Combination(combo.clone())),
            );
            (card, options)
        })
        .collect();

    LegalCaptures { entries }
}

/// Flatten capture options into moves: one per (card, capture) pair, and a
/// single placement for each card without options.
#[must_use]
pub fn expand_moves(captures: &LegalCaptures) -> Vec<Move> {
    let mut moves = Vec::new();
    for (card, options) in captures.iter() {
        if options.is_empty() {
            moves.push(Move::placement(card));
        } else {
            moves.extend(options.iter().map(|capture| Move::new(card, capture.clone())));
        }
    }
    moves
}

/// Scopone rules engine.
///
/// Cheap to clone: the configuration is shared.
#[derive(Clone, Debug, Default)]
pub struct ScoponeEngine {
    config: Arc<GameConfig>,
}

impl ScoponeEngine {
    /// Create an engine for a configuration.
    ///
    /// Fails on a configuration that could make a score go down.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// The rules configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The point table.
    #[must_use]
    pub fn values(&self) -> &PointTable {
        &self.config.values
    }

    /// Capture options for every card in the active hand.
    #[must_use]
    pub fn legal_captures(&self, state: &GameState) -> LegalCaptures {
        let hand: SmallVec<[Card; 10]> = state.active_hand().iter().copied().collect();
        let table: SmallVec<[Card; 16]> = state.table().iter().copied().collect();
        enumerate_captures(&hand, &table)
    }

    /// Every legal move of the active seat.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        expand_moves(&self.legal_captures(state))
    }

    /// Check a move against a state without applying it.
    pub fn check_move(&self, state: &GameState, mv: &Move) -> Result<()> {
        let player = state.active();
        if !state.active_hand().contains(&mv.card) {
            return Err(ScoponeError::CardNotInHand {
                card: mv.card,
                player,
            });
        }

        let captured = mv.capture.cards();
        if let Capture::Combination(cards) = &mv.capture {
            let distinct: FxHashSet<Card> = cards.iter().copied().collect();
            if cards.len() < 2 || distinct.len() != cards.len() {
                return Err(ScoponeError::InvalidCombination { len: distinct.len() });
            }
        }
        if let Some(&missing) = captured.iter().find(|c| !state.table().contains(c)) {
            return Err(ScoponeError::CaptureNotOnTable { card: missing });
        }

        match &mv.capture {
            Capture::Placement => {
                let can_capture = self
                    .legal_captures(state)
                    .get(mv.card)
                    .is_some_and(|options| !options.is_empty());
                if can_capture {
                    return Err(ScoponeError::CaptureAvailable { card: mv.card });
                }
            }
            Capture::Direct(_) | Capture::Combination(_) => {
                let sum = mv.capture.rank_sum();
                if sum != u32::from(mv.card.rank()) {
                    return Err(ScoponeError::RankMismatch {
                        played: mv.card,
                        captured: sum,
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply a move to a copy of `state`.
    ///
    /// The input state is left untouched.
    pub fn apply_move(&self, state: &GameState, mv: &Move) -> Result<GameState> {
        self.check_move(state, mv)?;

        let mut next = state.clone();
        let player = next.active();
        let team = player.team();
        next.take_from_hand(player, mv.card);

        let captured = match &mv.capture {
            Capture::Placement => {
                next.place_on_table(mv.card);
                false
            }
            Capture::Direct(_) | Capture::Combination(_) => {
                for &card in mv.capture.cards() {
                    next.take_from_table(card);
                }
                next.bank(team, std::iter::once(mv.card).chain(mv.capture.cards().iter().copied()));
                next.add_score(team, mv.take_value(self.values()));
                next.set_last_capture(player);
                true
            }
        };

        next.advance_turn();
        next.set_parent_move(mv.clone());

        if next.is_terminal() {
            self.settle_in_place(&mut next);
        } else if captured && next.table().is_empty() {
            trace!(%player, %team, "sweep");
            next.add_score(team, self.config.sweep_bonus);
        }

        trace!(%player, %mv, reward = next.reward_for(team), "applied move");
        Ok(next)
    }

    /// True when the seat to move has nothing left to play.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> bool {
        state.is_terminal()
    }

    /// Every state reachable by one legal move, in move order.
    ///
    /// Each child records the move that produced it.
    pub fn find_children(&self, state: &GameState) -> Result<Vec<GameState>> {
        self.legal_moves(state)
            .iter()
            .map(|mv| self.apply_move(state, mv))
            .collect()
    }

    /// A uniformly chosen child, or `None` for a terminal state.
    pub fn find_random_child(&self, state: &GameState, rng: &mut GameRng) -> Result<Option<GameState>> {
        let moves = self.legal_moves(state);
        match rng.choose(&moves) {
            Some(mv) => self.apply_move(state, mv).map(Some),
            None => Ok(None),
        }
    }

    /// Hand out the cards left on the table once the hand is over.
    ///
    /// They go to the team of the last seat that captured. If nobody captured
    /// during the hand, the configured [`LeftoverFallback`] decides; under
    /// `Nobody` the cards stay on the table unscored. Returns the state
    /// unchanged if it is not terminal or the table is already empty.
    ///
    /// [`LeftoverFallback`]: crate::core::LeftoverFallback
    #[must_use]
    pub fn settle_leftovers(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if next.is_terminal() {
            self.settle_in_place(&mut next);
        }
        next
    }

    fn settle_in_place(&self, state: &mut GameState) {
        if state.table().is_empty() {
            return;
        }

        let recipient = state
            .last_capture()
            .map(|p| p.team())
            .or_else(|| self.config.leftover_fallback.team());

        if let Some(team) = recipient {
            let leftovers = state.sweep_table(team);
            let points = self.values().sum(leftovers.iter());
            trace!(%team, cards = leftovers.len(), points, "leftovers settled");
            state.add_score(team, points);
        }
    }

    /// Check that a state is internally consistent: no card appears twice and
    /// no hand is oversized.
    pub fn validate(&self, state: &GameState) -> Result<()> {
        for player in PlayerId::all() {
            let hand = state.hand(player);
            if hand.len() > MAX_HAND_SIZE {
                return Err(ScoponeError::HandTooLarge {
                    player,
                    len: hand.len(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &card in state.all_cards() {
            if !seen.insert(card) {
                return Err(ScoponeError::DuplicateCard { card });
            }
        }
        Ok(())
    }

    /// True when the state accounts for all 40 cards exactly once.
    #[must_use]
    pub fn accounts_for_full_deck(&self, state: &GameState) -> bool {
        let seen: FxHashSet<Card> = state.all_cards().copied().collect();
        seen.len() == DECK_SIZE && state.all_cards().count() == DECK_SIZE
    }
}
