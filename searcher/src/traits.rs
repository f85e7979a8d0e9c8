use std::fmt::Debug;
use std::hash::Hash;

use crate::problem::Action;

/// Accumulated path cost and heuristic estimates share one non-negative unit.
pub type Cost = usize;

/// A discrete configuration in the search space.
///
/// Equality and hashing identify a state in the visited table, so they must
/// stay stable for as long as a search runs.
pub trait State: Debug + Clone + Eq + Hash {
    /// Indicates that this state satisfies the goal, and
    /// causes the search algorithm to stop when it is dequeued.
    fn is_goal(&self) -> bool;
}

/// An interface for searching when a heuristic can be provided.
///
/// The fitness is the best guess at the cost remaining to reach a goal.
/// It must never overestimate that cost for [crate::astar] to be optimal.
pub trait HeuristicState: State {
    fn fitness(&self) -> Cost;
}

/// States which know how to enumerate their own moves.
///
/// Wrap the start state in [crate::StateSpace] to search it.
pub trait Transitions: State {
    fn actions(&self) -> Vec<Action<Self>>;
}
