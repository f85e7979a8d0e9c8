//! Duplicate detection: the best node found so far for each state.

use std::collections::{HashMap, TryReserveError};
use std::fmt::Debug;

use super::node::{Node, NodeId, Tree};
use crate::traits::State;

/// Decides whether a newly generated node is worth exploring,
/// given the node already recorded for the same state (if any).
pub trait Accept<S>: Debug + Default {
    fn accept(&self, existing: Option<&Node<S>>, candidate: &Node<S>) -> bool;
}

/// Explore each state at most once. Later nodes for a
/// state which has already been seen are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstSeen;

impl<S> Accept<S> for FirstSeen {
    fn accept(&self, existing: Option<&Node<S>>, _candidate: &Node<S>) -> bool {
        existing.is_none()
    }
}

/// Re-open a state whenever a strictly cheaper path to it turns up.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestCost;

impl<S> Accept<S> for BestCost {
    fn accept(&self, existing: Option<&Node<S>>, candidate: &Node<S>) -> bool {
        existing.map_or(true, |e| candidate.cost() < e.cost())
    }
}

/// Maps each state seen during a search to the best node reaching it.
#[derive(Debug)]
pub struct Visited<S>
where
    S: State,
{
    cache: HashMap<S, NodeId>,
}

impl<S> Default for Visited<S>
where
    S: State,
{
    fn default() -> Self {
        Visited {
            cache: HashMap::default(),
        }
    }
}

impl<S> Visited<S>
where
    S: State,
{
    /// Ask `policy` whether `candidate` should replace the recorded entry.
    pub fn admits<A>(&self, tree: &Tree<S>, policy: &A, candidate: &Node<S>) -> bool
    where
        A: Accept<S>,
    {
        let existing = self.cache.get(candidate.state()).map(|id| tree.get(*id));
        policy.accept(existing, candidate)
    }

    pub fn record(&mut self, state: S, node: NodeId) -> Result<(), TryReserveError> {
        self.cache.try_reserve(1)?;
        self.cache.insert(state, node);
        Ok(())
    }

    /// Whether `node` is still the best known node for `state`.
    ///
    /// Superseded nodes can linger in the frontier after a cheaper
    /// path replaced them here.
    pub fn is_current(&self, state: &S, node: NodeId) -> bool {
        self.cache.get(state) == Some(&node)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
