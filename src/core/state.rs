//! Game state for one hand of play.
//!
//! ## GameState
//!
//! Complete state at a point in the hand:
//! - Active seat (its team is derived from the seat)
//! - Each seat's hand
//! - Face-up table and undealt deck
//! - Team scores and captured piles
//! - Last seat to capture, and the move that produced this state
//!
//! Uses `im` persistent vectors, so `clone()` is O(1) and a clone shares
//! structure with its parent until one of them changes. The rules never
//! mutate a state in place: a move is applied to a clone.
//!
//! Card order in hands and on the table is kept as given; it is the order in
//! which moves are enumerated and ties are broken.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, DECK_SIZE};

use super::action::Move;
use super::error::{Result, ScoponeError};
use super::player::{PlayerId, PlayerMap, Team, TeamMap};

/// Most cards a seat can hold.
pub const MAX_HAND_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    active: PlayerId,
    hands: PlayerMap<Vector<Card>>,
    table: Vector<Card>,
    deck: Vector<Card>,
    scores: TeamMap<i64>,
    captured: TeamMap<Vector<Card>>,
    last_capture: Option<PlayerId>,
    parent_move: Option<Move>,
}

impl GameState {
    /// Create the state at the start of a hand.
    ///
    /// Scores start at zero. Fails if a hand holds more than ten cards or if
    /// any card appears twice across hands, table and deck.
    pub fn new(
        active: PlayerId,
        hands: [Vec<Card>; 4],
        table: Vec<Card>,
        deck: Vec<Card>,
    ) -> Result<Self> {
        let mut seen = FxHashSet::default();
        seen.reserve(DECK_SIZE);

        for (seat, hand) in PlayerId::all().zip(hands.iter()) {
            if hand.len() > MAX_HAND_SIZE {
                return Err(ScoponeError::HandTooLarge {
                    player: seat,
                    len: hand.len(),
                });
            }
        }

        for &card in hands.iter().flatten().chain(&table).chain(&deck) {
            if !seen.insert(card) {
                return Err(ScoponeError::DuplicateCard { card });
            }
        }

        let [h0, h1, h2, h3] = hands;
        let mut seats = [Some(h0), Some(h1), Some(h2), Some(h3)];

        Ok(Self {
            active,
            hands: PlayerMap::new(|p| {
                seats[p.index()].take().map(Vector::from).unwrap_or_default()
            }),
            table: Vector::from(table),
            deck: Vector::from(deck),
            scores: TeamMap::default(),
            captured: TeamMap::default(),
            last_capture: None,
            parent_move: None,
        })
    }

    // === Queries ===

    /// The seat to move.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    /// The team of the seat to move.
    #[must_use]
    pub fn team(&self) -> Team {
        self.active.team()
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Vector<Card> {
        &self.hands[player]
    }

    /// The hand of the seat to move.
    #[must_use]
    pub fn active_hand(&self) -> &Vector<Card> {
        &self.hands[self.active]
    }

    /// Face-up cards on the table.
    #[must_use]
    pub fn table(&self) -> &Vector<Card> {
        &self.table
    }

    /// Undealt stock. The rules never draw from it.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// A team's accumulated score.
    #[must_use]
    pub fn score(&self, team: Team) -> i64 {
        self.scores[team]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &TeamMap<i64> {
        &self.scores
    }

    /// Cards a team has taken so far.
    #[must_use]
    pub fn captured(&self, team: Team) -> &Vector<Card> {
        &self.captured[team]
    }

    /// Last seat to capture in this hand, if any capture happened.
    #[must_use]
    pub fn last_capture(&self) -> Option<PlayerId> {
        self.last_capture
    }

    /// The move that produced this state, if it was produced by a move.
    #[must_use]
    pub fn parent_move(&self) -> Option<&Move> {
        self.parent_move.as_ref()
    }

    /// Score difference from the active team's point of view.
    #[must_use]
    pub fn reward(&self) -> i64 {
        self.reward_for(self.team())
    }

    /// Score difference from `team`'s point of view.
    #[must_use]
    pub fn reward_for(&self, team: Team) -> i64 {
        self.scores[team] - self.scores[team.opponent()]
    }

    /// True when the seat to move has nothing left to play.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.active_hand().is_empty()
    }

    /// True when every seat has played out its hand.
    #[must_use]
    pub fn hands_exhausted(&self) -> bool {
        self.hands.values().all(Vector::is_empty)
    }

    /// Every card the state accounts for: hands, table, deck, captured piles.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.hands
            .values()
            .flat_map(|h| h.iter())
            .chain(self.table.iter())
            .chain(self.deck.iter())
            .chain(Team::ALL.into_iter().flat_map(move |t| self.captured[t].iter()))
    }

    // === Transitions (rules only) ===

    /// Remove a card from a seat's hand. Returns false if it was not there.
    pub(crate) fn take_from_hand(&mut self, player: PlayerId, card: Card) -> bool {
        match self.hands[player].index_of(&card) {
            Some(pos) => {
                self.hands[player].remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn place_on_table(&mut self, card: Card) {
        self.table.push_back(card);
    }

    /// Remove a card from the table. Returns false if it was not there.
    pub(crate) fn take_from_table(&mut self, card: Card) -> bool {
        match self.table.index_of(&card) {
            Some(pos) => {
                self.table.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Move the whole table into a team's pile, returning the cards taken.
    pub(crate) fn sweep_table(&mut self, team: Team) -> Vector<Card> {
        let leftovers = std::mem::take(&mut self.table);
        self.captured[team].append(leftovers.clone());
        leftovers
    }

    pub(crate) fn bank(&mut self, team: Team, cards: impl IntoIterator<Item = Card>) {
        self.captured[team].extend(cards);
    }

    pub(crate) fn add_score(&mut self, team: Team, points: i64) {
        debug_assert!(points >= 0, "scores never decrease");
        self.scores[team] += points;
    }

    pub(crate) fn set_last_capture(&mut self, player: PlayerId) {
        self.last_capture = Some(player);
    }

    pub(crate) fn set_parent_move(&mut self, mv: Move) {
        self.parent_move = Some(mv);
    }

    pub(crate) fn advance_turn(&mut self) {
        self.active = self.active.next();
    }
}
