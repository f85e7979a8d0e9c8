pub use bfs::{bfs, BreadthFirst};
pub use dfs::{dfs, DepthFirst};

mod bfs {
    use crate::algorithm::cache::FirstSeen;
    use crate::algorithm::node::Node;
    use crate::algorithm::score::Evaluate;
    use crate::algorithm::Algorithm;
    use crate::errors::Result;
    use crate::problem::Problem;
    use crate::solution::Solution;
    use crate::traits::State;

    /// Expands the shallowest node first.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BreadthFirst;

    impl<S> Evaluate<S> for BreadthFirst
    where
        S: State,
    {
        type Score = usize;
        type Policy = FirstSeen;

        fn name(&self) -> &'static str {
            "breadth-first"
        }

        fn score(&self, node: &Node<S>) -> Self::Score {
            node.depth()
        }
    }

    /// Breadth-first search. Among nodes at the same depth, the order
    /// is determined by the order of [Problem::actions].
    pub fn bfs<P>(problem: &P) -> Result<Solution<P::State>>
    where
        P: Problem,
    {
        Algorithm::new(BreadthFirst).search(problem)
    }
}

mod dfs {
    use std::cmp::Reverse;

    use crate::algorithm::cache::FirstSeen;
    use crate::algorithm::node::Node;
    use crate::algorithm::score::Evaluate;
    use crate::algorithm::Algorithm;
    use crate::errors::Result;
    use crate::problem::Problem;
    use crate::solution::Solution;
    use crate::traits::State;

    /// Expands the deepest node first.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct DepthFirst;

    impl<S> Evaluate<S> for DepthFirst
    where
        S: State,
    {
        type Score = Reverse<usize>;
        type Policy = FirstSeen;

        fn name(&self) -> &'static str {
            "depth-first"
        }

        fn score(&self, node: &Node<S>) -> Self::Score {
            Reverse(node.depth())
        }
    }

    /// Depth-first search. Siblings are explored in the order
    /// produced by [Problem::actions].
    pub fn dfs<P>(problem: &P) -> Result<Solution<P::State>>
    where
        P: Problem,
    {
        Algorithm::new(DepthFirst).search(problem)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::fixtures::*;
    use crate::graph::{Graph, Waypoint};
    use crate::Solution;
    use test_log::test;

    fn nodes(solution: &Solution<Waypoint<'_, &'static str>>) -> Vec<&'static str> {
        solution.states().iter().map(|w| *w.node()).collect()
    }

    #[test]
    fn bfs_diamond() {
        let graph = diamond();
        let solution = bfs(&graph.problem("A")).unwrap();

        assert_eq!(solution.depth(), 2);
        assert_eq!(nodes(&solution), vec!["A", "B", "D"]);
        assert_eq!(solution.cost(), 2);
    }

    #[test]
    fn bfs_fewest_steps() {
        // Long cheap way round versus one expensive hop.
        let mut graph = Graph::new();
        graph.connect("A", "B", 1);
        graph.connect("B", "C", 1);
        graph.connect("C", "Z", 1);
        graph.connect("A", "Z", 100);
        graph.mark_goal("Z");

        let solution = bfs(&graph.problem("A")).unwrap();
        assert_eq!(nodes(&solution), vec!["A", "Z"]);
        assert_eq!(solution.cost(), 100);
    }

    #[test]
    fn bfs_grid() {
        let graph = grid(6);
        let solution = bfs(&graph.problem((0, 0))).unwrap();
        assert_eq!(solution.depth(), 10);
        assert_eq!(solution.goal().map(|w| *w.node()), Some((5, 5)));
    }

    #[test]
    fn dfs_follows_first_branch() {
        let mut graph = Graph::new();
        graph.connect("A", "B", 1);
        graph.connect("A", "C", 1);
        graph.connect("B", "D", 1);
        graph.connect("D", "Z", 1);
        graph.connect("C", "Z", 1);
        graph.mark_goal("Z");

        let solution = dfs(&graph.problem("A")).unwrap();
        assert_eq!(nodes(&solution), vec!["A", "B", "D", "Z"]);

        let solution = bfs(&graph.problem("A")).unwrap();
        assert_eq!(nodes(&solution), vec!["A", "C", "Z"]);
    }

    #[test]
    fn dfs_terminates_on_cycles() {
        let graph = disconnected();
        let solution = dfs(&graph.problem("A")).unwrap();
        assert!(solution.is_failure());
        assert_eq!(solution.stats().expanded, 3);
    }

    #[test]
    fn dfs_diamond() {
        let graph = diamond();
        let solution = dfs(&graph.problem("A")).unwrap();
        assert_eq!(solution.depth(), 2);
        assert_eq!(solution.start().map(|w| *w.node()), Some("A"));
        assert_eq!(solution.goal().map(|w| *w.node()), Some("D"));
    }
}
