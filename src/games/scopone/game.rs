//! Scopone game setup and the entry points used by a surrounding application.

use tracing::debug;

use crate::cards::Card;
use crate::core::{GameConfig, GameRng, GameState, Move, PlayerId, Result, SEATS};
use crate::mcts::{SearchAgent, SearchConfig, SearchStats};
use crate::rules::ScoponeEngine;

/// Cards dealt to each seat by [`ScoponeBuilder::deal`].
pub const DEAL_SIZE: usize = 10;

/// A Scopone table: the rules plus the three entry points.
#[derive(Clone, Debug, Default)]
pub struct Scopone {
    engine: ScoponeEngine,
}

/// Builder for creating a Scopone game and its opening state.
#[derive(Clone, Debug)]
pub struct ScoponeBuilder {
    active: PlayerId,
    hands: [Vec<Card>; SEATS],
    table: Vec<Card>,
    deck: Vec<Card>,
    config: GameConfig,
    deal_seed: Option<u64>,
}

impl Default for ScoponeBuilder {
    fn default() -> Self {
        Self {
            active: PlayerId::wrapping(0),
            hands: Default::default(),
            table: Vec::new(),
            deck: Vec::new(),
            config: GameConfig::default(),
            deal_seed: None,
        }
    }
}

impl ScoponeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat to move first (default seat 0).
    pub fn active(mut self, seat: PlayerId) -> Self {
        self.active = seat;
        self
    }

    pub fn hand(mut self, seat: PlayerId, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hands[seat.index()] = cards.into_iter().collect();
        self
    }

    pub fn table(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.table = cards.into_iter().collect();
        self
    }

    pub fn deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = cards.into_iter().collect();
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Shuffle the 40 cards with `seed` and deal ten to each seat.
    ///
    /// Replaces any hands, table or deck set on the builder.
    pub fn deal(mut self, seed: u64) -> Self {
        self.deal_seed = Some(seed);
        self
    }

    /// Build the game and the opening state.
    pub fn build(self) -> Result<(Scopone, GameState)> {
        let game = Scopone::new(self.config)?;

        let (hands, table, deck) = match self.deal_seed {
            Some(seed) => (deal_hands(seed), Vec::new(), Vec::new()),
            None => (self.hands, self.table, self.deck),
        };

        let state = game.initialize(self.active, hands, table, deck)?;
        Ok((game, state))
    }
}

fn deal_hands(seed: u64) -> [Vec<Card>; SEATS] {
    let mut cards: Vec<Card> = Card::universe().collect();
    GameRng::new(seed).shuffle(&mut cards);

    let mut chunks = cards.chunks(DEAL_SIZE).map(<[Card]>::to_vec);
    std::array::from_fn(|_| chunks.next().unwrap_or_default())
}

impl Scopone {
    /// Create a game with a rules configuration.
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            engine: ScoponeEngine::new(config)?,
        })
    }

    /// Get the rules engine.
    #[must_use]
    pub fn engine(&self) -> &ScoponeEngine {
        &self.engine
    }

    /// Create the state at the start of a hand.
    ///
    /// Teams follow from the seats, and both scores start at zero. Fails if a
    /// hand holds more than ten cards or a card appears twice.
    pub fn initialize(
        &self,
        active: PlayerId,
        hands: [Vec<Card>; SEATS],
        table: Vec<Card>,
        deck: Vec<Card>,
    ) -> Result<GameState> {
        let state = GameState::new(active, hands, table, deck)?;
        self.engine.validate(&state)?;
        Ok(state)
    }

    /// Choose the move for the seat to act, running `budget` rollouts with
    /// the default seed.
    pub fn agent_decide(&self, state: &GameState, budget: u32) -> Result<Move> {
        self.agent_decide_with(state, SearchConfig::default().with_budget(budget))
            .map(|(mv, _)| mv)
    }

    /// Like [`agent_decide`](Self::agent_decide) with a full search
    /// configuration, also returning the search statistics.
    pub fn agent_decide_with(
        &self,
        state: &GameState,
        config: SearchConfig,
    ) -> Result<(Move, SearchStats)> {
        let mut agent = SearchAgent::new(self.engine.clone(), config);
        let mv = agent.tree_search(state)?;
        debug_assert!(self.engine.legal_moves(state).contains(&mv));
        Ok((mv, agent.stats().clone()))
    }

    /// Advance the game by a move chosen outside the agent.
    ///
    /// Uses the same transition as the search, so a move the engine rejects
    /// here would never be played in a rollout either.
    pub fn apply_external_move(&self, state: &GameState, mv: &Move) -> Result<GameState> {
        let next = self.engine.apply_move(state, mv)?;
        debug!(seat = %state.active(), %mv, "external move");
        Ok(next)
    }
}
