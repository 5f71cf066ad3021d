//! The set of macro-children for one decision.
//!
//! Children live in a flat `Vec<MacroChild>` in legal-move order and are
//! looked up by their first move. Rollout results are credited through that
//! lookup, so a rollout only ever updates the child it started from.

use rustc_hash::FxHashMap;

use super::node::{ChildId, MacroChild};
use crate::core::{GameState, Move, PlayerId, Team};

/// Macro-children of a decision state.
#[derive(Clone, Debug)]
pub struct MacroTree {
    /// The decision state.
    root: GameState,

    /// Seat the search decides for.
    decider: PlayerId,

    /// All children, in legal-move order.
    children: Vec<MacroChild>,

    /// First move to child.
    by_move: FxHashMap<Move, ChildId>,
}

impl MacroTree {
    /// Create an empty tree for a decision state.
    pub fn new(root: GameState) -> Self {
        let decider = root.active();
        Self {
            root,
            decider,
            children: Vec::new(),
            by_move: FxHashMap::default(),
        }
    }

    /// Add a child, returning its ID.
    ///
    /// A second child with the same first move replaces nothing: the
    /// existing ID is returned.
    pub fn push(&mut self, child: MacroChild) -> ChildId {
        if let Some(&id) = self.by_move.get(&child.first_move) {
            return id;
        }
        let id = ChildId::new(self.children.len() as u32);
        self.by_move.insert(child.first_move.clone(), id);
        self.children.push(child);
        id
    }

    /// The decision state.
    #[must_use]
    pub fn root(&self) -> &GameState {
        &self.root
    }

    /// The seat the search decides for.
    #[must_use]
    pub fn decider(&self) -> PlayerId {
        self.decider
    }

    /// The team whose reward the search maximizes.
    #[must_use]
    pub fn team(&self) -> Team {
        self.decider.team()
    }

    /// Get a child by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: ChildId) -> &MacroChild {
        &self.children[id.index()]
    }

    /// Find the child started by a move.
    #[must_use]
    pub fn find(&self, first_move: &Move) -> Option<ChildId> {
        self.by_move.get(first_move).copied()
    }

    /// All children, in legal-move order.
    #[must_use]
    pub fn children(&self) -> &[MacroChild] {
        &self.children
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Credit a terminal reward to the child started by `first_move`.
    ///
    /// Returns false if no child starts with that move.
    pub fn record(&mut self, first_move: &Move, reward: i64) -> bool {
        match self.by_move.get(first_move) {
            Some(&id) => {
                self.children[id.index()].record(reward);
                true
            }
            None => false,
        }
    }

    /// The child with the highest best-known reward.
    ///
    /// Ties go to the earliest child.
    #[must_use]
    pub fn best(&self) -> Option<ChildId> {
        self.children
            .iter()
            .enumerate()
            .max_by_key(|(i, c)| (c.estimate(), std::cmp::Reverse(*i)))
            .map(|(i, _)| ChildId::new(i as u32))
    }

    /// (first move, estimate) for every child.
    pub fn estimates(&self) -> Vec<(Move, i64)> {
        self.children
            .iter()
            .map(|c| (c.first_move.clone(), c.estimate()))
            .collect()
    }
}
