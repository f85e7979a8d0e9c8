//! The outcome of a search.

use crate::algorithm::node::{NodeId, Tree};
use crate::algorithm::SearchStats;
use crate::traits::Cost;

/// Ordered states from the start to a goal, or a failure marker.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    states: Vec<S>,
    cost: Cost,
    stats: SearchStats,
}

impl<S> Solution<S> {
    /// The search exhausted its frontier without reaching a goal.
    pub fn failure() -> Self {
        Self {
            states: Vec::new(),
            cost: 0,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn is_failure(&self) -> bool {
        self.states.is_empty()
    }

    /// States from start to goal. Empty for a failure.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn into_states(self) -> Vec<S> {
        self.states
    }

    /// Accumulated cost of every action along the path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of actions taken.
    pub fn depth(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&S> {
        self.states.first()
    }

    pub fn goal(&self) -> Option<&S> {
        self.states.last()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<S> Solution<S>
where
    S: Clone,
{
    /// Rebuild the path to `goal` by walking parent links back to the root.
    pub(crate) fn from_tree(tree: &Tree<S>, goal: NodeId) -> Self {
        let cost = tree.get(goal).cost();
        let mut states: Vec<S> = tree.ancestry(goal).map(|n| n.state().clone()).collect();
        states.reverse();

        Self {
            states,
            cost,
            stats: SearchStats::default(),
        }
    }
}
