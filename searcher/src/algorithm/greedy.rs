use super::cache::BestCost;
use super::node::Node;
use super::score::Evaluate;
use super::Algorithm;
use crate::errors::Result;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::traits::{Cost, HeuristicState};

/// Expands the node whose state looks closest to a goal,
/// ignoring the cost already paid to get there.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;

impl<S> Evaluate<S> for Greedy
where
    S: HeuristicState,
{
    type Score = Cost;
    type Policy = BestCost;

    fn name(&self) -> &'static str {
        "greedy"
    }

    fn score(&self, node: &Node<S>) -> Self::Score {
        node.state().fitness()
    }
}

/// Greedy best-first search. Fast when the heuristic is good,
/// but the solution is not guaranteed to be the cheapest.
pub fn greedy<P>(problem: &P) -> Result<Solution<P::State>>
where
    P: Problem,
    P::State: HeuristicState,
{
    Algorithm::new(Greedy).search(problem)
}
