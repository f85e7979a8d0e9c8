//! Dijkstra's Algorithm

use super::cache::BestCost;
use super::node::Node;
use super::score::Evaluate;
use super::Algorithm;
use crate::errors::Result;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::traits::{Cost, State};

/// Expands the node with the lowest accumulated cost first.
///
/// A state reached again along a strictly cheaper path is re-queued;
/// the superseded node is skipped when it reaches the front.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformCost;

impl<S> Evaluate<S> for UniformCost
where
    S: State,
{
    type Score = Cost;
    type Policy = BestCost;

    fn name(&self) -> &'static str {
        "uniform-cost"
    }

    fn score(&self, node: &Node<S>) -> Self::Score {
        node.cost()
    }
}

/// Perform a search using Dijkstra's algorithm.
///
/// Dijkstra's algorithm behaves like a breadth first search, but always
/// searches the next shortest path even when paths end up with varying
/// lengths. The returned solution has the lowest cost of any path.
pub fn dijkstra<P>(problem: &P) -> Result<Solution<P::State>>
where
    P: Problem,
{
    Algorithm::new(UniformCost).search(problem)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::fixtures::*;
    use crate::graph::Graph;
    use test_log::test;

    #[test]
    fn diamond_cheapest() {
        let graph = diamond();
        let solution = dijkstra(&graph.problem("A")).unwrap();

        let nodes: Vec<_> = solution.states().iter().map(|w| *w.node()).collect();
        assert_eq!(nodes, vec!["A", "B", "D"]);
        assert_eq!(solution.cost(), 2);
    }

    #[test]
    fn cheaper_path_found_later() {
        let graph = detour();
        let solution = dijkstra(&graph.problem("A")).unwrap();

        let nodes: Vec<_> = solution.states().iter().map(|w| *w.node()).collect();
        assert_eq!(nodes, vec!["A", "B", "C", "E"]);
        assert_eq!(solution.cost(), 3);

        // The direct edge to C was superseded before it was expanded.
        assert_eq!(solution.stats().expanded, 3);
    }

    #[test]
    fn open_grid() {
        let graph = grid(8);
        let solution = dijkstra(&graph.problem((0, 0))).unwrap();
        assert_eq!(solution.cost(), 14);
        assert_eq!(solution.depth(), 14);
    }

    #[test]
    fn enormous_costs_saturate() {
        let mut graph = Graph::new();
        graph.connect("A", "B", Cost::MAX);
        graph.connect("B", "C", 1);
        graph.mark_goal("C");

        let solution = dijkstra(&graph.problem("A")).unwrap();
        assert_eq!(solution.cost(), Cost::MAX);
        assert_eq!(solution.depth(), 2);

        // A saturated path never looks cheaper than a modest one.
        graph.connect("A", "D", 3);
        graph.connect("D", "C", 3);

        let solution = dijkstra(&graph.problem("A")).unwrap();
        let nodes: Vec<_> = solution.states().iter().map(|w| *w.node()).collect();
        assert_eq!(nodes, vec!["A", "D", "C"]);
        assert_eq!(solution.cost(), 6);
    }

    #[test]
    fn no_path() {
        let graph = disconnected();
        let solution = dijkstra(&graph.problem("A")).unwrap();
        assert!(solution.is_failure());
        assert!(solution.into_states().is_empty());
    }
}
