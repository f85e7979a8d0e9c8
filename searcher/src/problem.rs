//! The vocabulary a domain supplies to the search engine.

use crate::traits::{Cost, State, Transitions};

/// A move from one state to a successor, carrying a cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<S> {
    cost: Cost,
    successor: S,
}

impl<S> Action<S> {
    pub fn new(cost: Cost, successor: S) -> Self {
        Self { cost, successor }
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn successor(&self) -> &S {
        &self.successor
    }

    pub fn into_successor(self) -> S {
        self.successor
    }
}

/// Lazy sequence of actions available from a state.
pub type Actions<'a, S> = Box<dyn Iterator<Item = Action<S>> + 'a>;

/// A search problem: where to begin, and how to move.
///
/// Move enumeration lives here rather than on the state so that one state
/// type can be shared between several problems.
pub trait Problem {
    type State: State;

    fn start(&self) -> Self::State;

    fn actions<'a>(&'a self, state: &'a Self::State) -> Actions<'a, Self::State>;
}

/// Adapts a state which enumerates its own actions into a [Problem].
#[derive(Debug, Clone)]
pub struct StateSpace<S> {
    start: S,
}

impl<S> StateSpace<S>
where
    S: Transitions,
{
    pub fn new(start: S) -> Self {
        Self { start }
    }
}

impl<S> Problem for StateSpace<S>
where
    S: Transitions,
{
    type State = S;

    fn start(&self) -> Self::State {
        self.start.clone()
    }

    fn actions<'a>(&'a self, state: &'a Self::State) -> Actions<'a, Self::State> {
        Box::new(state.actions().into_iter())
    }
}
