use super::cache::BestCost;
use super::node::Node;
use super::score::Evaluate;
use super::Algorithm;
use crate::errors::Result;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::traits::{Cost, HeuristicState};

/// Expands the node with the lowest estimated total cost:
/// the cost paid so far plus the heuristic fitness of its state.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl<S> Evaluate<S> for AStar
where
    S: HeuristicState,
{
    type Score = Cost;
    type Policy = BestCost;

    fn name(&self) -> &'static str {
        "a-star"
    }

    fn score(&self, node: &Node<S>) -> Self::Score {
        node.state().fitness().saturating_add(node.cost())
    }
}

/// A* search. With an admissible heuristic the solution is the
/// cheapest path; states are re-opened when a cheaper path turns up,
/// so the heuristic need not be consistent.
pub fn astar<P>(problem: &P) -> Result<Solution<P::State>>
where
    P: Problem,
    P::State: HeuristicState,
{
    Algorithm::new(AStar).search(problem)
}
