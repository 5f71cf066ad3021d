//! Macro-child Monte Carlo search.
//!
//! The deciding seat's moves are the only real choices. The other three
//! seats play the greedy policy, which makes every first move lead to exactly
//! one round-end state: its macro-child. Rollouts then alternate a uniformly
//! random move for the deciding seat with greedy rounds for everybody else
//! until the hand ends. Each macro-child starts at the reward of its round-end
//! state and keeps the max of that and every terminal reward seen from it.
//!
//! Every rollout gets its own RNG forked from the seed before any rollout
//! runs. Rollout `i` is therefore the same whatever the budget and whatever
//! the thread it runs on, and raising the budget only adds rollouts.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::core::{GameRng, GameState, Move, Result, ScoponeError};
use crate::greedy::{GreedyPolicy, OpponentPolicy};
use crate::rules::ScoponeEngine;

use super::config::SearchConfig;
use super::node::{ChildId, MacroChild};
use super::stats::SearchStats;
use super::tree::MacroTree;

/// One finished rollout.
#[derive(Clone, Debug)]
pub struct Rollout {
    /// Macro-child the rollout started from.
    pub origin: ChildId,

    /// That child's first move.
    pub first_move: Move,

    /// Terminal reward for the deciding team.
    pub reward: i64,

    /// The macro-child's state, every state after it, and finally the
    /// terminal state.
    pub path: Vec<GameState>,
}

impl Rollout {
    /// Moves played after the macro-child's round.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The state the rollout ended in.
    #[must_use]
    pub fn terminal(&self) -> Option<&GameState> {
        self.path.last()
    }
}

/// Search context for the deciding seat.
///
/// Owns the rules engine, the policy for the other seats, and the results of
/// the last search.
pub struct SearchAgent {
    /// The rules engine.
    engine: ScoponeEngine,

    /// Search configuration.
    config: SearchConfig,

    /// Policy for every seat but the deciding one.
    opponent: Box<dyn OpponentPolicy>,

    /// Macro-children of the last decision.
    tree: Option<MacroTree>,

    /// The child chosen by the last decision.
    chosen: Option<ChildId>,

    /// Search statistics.
    stats: SearchStats,
}

impl SearchAgent {
    /// Create a search context playing greedy opponents.
    pub fn new(engine: ScoponeEngine, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            opponent: Box::new(GreedyPolicy),
            tree: None,
            chosen: None,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom policy for the other seats. It must be deterministic.
    pub fn with_opponent<O: OpponentPolicy + 'static>(mut self, opponent: O) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    /// Build one macro-child per legal move of the active seat.
    ///
    /// Each move is applied, then the other seats play greedily until the
    /// deciding seat is to move again or the hand is over. Baselines are the
    /// resulting rewards for the deciding team.
    pub fn expand(&self, state: &GameState) -> Result<MacroTree> {
        let mut tree = MacroTree::new(state.clone());
        let team = tree.team();

        for child in self.engine.find_children(state)? {
            let Some(first_move) = child.parent_move().cloned() else {
                continue;
            };
            let round = self.fast_forward(child, &tree)?;
            let baseline = round.reward_for(team);
            tree.push(MacroChild::new(first_move, round, baseline));
        }

        Ok(tree)
    }

    /// Play the other seats until control returns to the decider.
    fn fast_forward(&self, mut state: GameState, tree: &MacroTree) -> Result<GameState> {
        while !state.is_terminal() && state.active() != tree.decider() {
            state = self.opponent_move(&state)?;
        }
        Ok(state)
    }

    fn opponent_move(&self, state: &GameState) -> Result<GameState> {
        let mv = self
            .opponent
            .choose_move(state, self.engine.values())
            .ok_or(ScoponeError::NoLegalMove {
                player: state.active(),
            })?;
        self.engine.apply_move(state, &mv)
    }

    /// Run one rollout to the end of the hand.
    ///
    /// The first move is drawn uniformly from the tree's children, which is
    /// the same as drawing a random legal move at the decision state. From
    /// its round-end state, the decider plays uniformly random legal moves
    /// and everybody else plays the opponent policy.
    pub fn rollout(&self, tree: &MacroTree, rng: &mut GameRng) -> Result<Rollout> {
        let origin = match rng.choose(tree.children()) {
            Some(child) => child,
            None => return Err(ScoponeError::TerminalDecision),
        };
        let origin_id = tree
            .find(&origin.first_move)
            .ok_or(ScoponeError::TerminalDecision)?;

        let mut state = origin.state.clone();
        let mut path = vec![state.clone()];

        while !state.is_terminal() {
            state = if state.active() == tree.decider() {
                match self.engine.find_random_child(&state, rng)? {
                    Some(next) => next,
                    None => break,
                }
            } else {
                self.opponent_move(&state)?
            };
            path.push(state.clone());
        }

        let reward = state.reward_for(tree.team());

        trace!(origin = %origin_id, first_move = %origin.first_move, reward, plies = path.len() - 1, "rollout");
        Ok(Rollout {
            origin: origin_id,
            first_move: origin.first_move.clone(),
            reward,
            path,
        })
    }

    /// Pick the deciding seat's move for `state`.
    ///
    /// Runs `budget` rollouts and returns the first move of the macro-child
    /// with the highest best-known reward. Fails with
    /// [`ScoponeError::TerminalDecision`] if the hand is already over.
    pub fn tree_search(&mut self, state: &GameState) -> Result<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.tree = None;
        self.chosen = None;

        if self.engine.is_terminal(state) {
            return Err(ScoponeError::TerminalDecision);
        }

        let mut tree = self.expand(state)?;
        self.stats.macro_children = tree.len() as u32;

        // Only one move: nothing to compare.
        if tree.len() > 1 {
            let mut master = GameRng::new(self.config.seed);
            let rngs: Vec<GameRng> = (0..self.config.budget).map(|_| master.fork()).collect();

            for rollout in self.run_rollouts(&tree, rngs)? {
                self.stats.rollouts += 1;
                self.stats.rollout_plies += rollout.plies() as u64;
                tree.record(&rollout.first_move, rollout.reward);
            }
        }

        let chosen = tree.best().ok_or(ScoponeError::NoLegalMove {
            player: state.active(),
        })?;
        let child = tree.get(chosen);
        let mv = child.first_move.clone();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            seat = %state.active(),
            chosen = %mv,
            estimate = child.estimate(),
            baseline = child.baseline,
            budget = self.config.budget,
            macro_children = tree.len(),
            time_us = self.stats.time_us,
            "decision"
        );

        self.tree = Some(tree);
        self.chosen = Some(chosen);
        Ok(mv)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_rollouts(&self, tree: &MacroTree, rngs: Vec<GameRng>) -> Result<Vec<Rollout>> {
        rngs.into_iter()
            .map(|mut rng| self.rollout(tree, &mut rng))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_rollouts(&self, tree: &MacroTree, rngs: Vec<GameRng>) -> Result<Vec<Rollout>> {
        rngs.into_par_iter()
            .map(|mut rng| self.rollout(tree, &mut rng))
            .collect()
    }

    /// Macro-children of the last decision, with their statistics.
    #[must_use]
    pub fn tree(&self) -> Option<&MacroTree> {
        self.tree.as_ref()
    }

    /// (first move, best known reward) for each macro-child of the last
    /// decision.
    pub fn estimates(&self) -> Vec<(Move, i64)> {
        self.tree.as_ref().map(MacroTree::estimates).unwrap_or_default()
    }

    /// Best known reward of the move chosen by the last decision.
    #[must_use]
    pub fn chosen_estimate(&self) -> Option<i64> {
        let tree = self.tree.as_ref()?;
        self.chosen.map(|id| tree.get(id).estimate())
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the engine reference.
    pub fn engine(&self) -> &ScoponeEngine {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
