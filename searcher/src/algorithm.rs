//! Provides the building blocks for search algorithms

use std::collections::TryReserveError;

use log::{debug, info, trace};

use self::cache::Visited;
use self::node::{Node, NodeId, Tree};
use self::queue::Frontier;
use self::score::Evaluate;
use crate::errors::{Result, SearchError};
use crate::problem::Problem;
use crate::traits::State;
use crate::solution::Solution;

pub(crate) mod astar;
pub(crate) mod basic;
pub mod cache;
pub(crate) mod dijkstra;
pub(crate) mod greedy;
pub mod node;
pub mod queue;
pub mod score;

/// Tunables shared by every search built from one [Algorithm].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Log a progress line every this many expansions.
    pub progress: Option<usize>,
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,

    /// Child nodes built from actions.
    pub generated: usize,

    /// Generated nodes rejected by the duplicate policy, plus
    /// superseded nodes skipped when they reached the front.
    pub discarded: usize,

    /// Largest the frontier got.
    pub max_frontier: usize,
}

/// Factory for searches using one evaluation strategy.
///
/// An algorithm holds no per-search state: every call to
/// [Algorithm::solver] builds a fresh frontier and visited table,
/// so a single algorithm can be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Algorithm<E> {
    evaluation: E,
    options: SearchOptions,
}

impl<E> Algorithm<E> {
    pub const fn new(evaluation: E) -> Self {
        Self {
            evaluation,
            options: SearchOptions { progress: None },
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Prepare a search of `problem`, ready to [Solver::run].
    pub fn solver<'p, P>(&self, problem: &'p P) -> Solver<'p, P, E>
    where
        P: Problem,
        E: Evaluate<P::State>,
    {
        Solver::new(problem, self.evaluation.clone(), self.options)
    }

    /// Run a search of `problem` to completion.
    pub fn search<P>(&self, problem: &P) -> Result<Solution<P::State>>
    where
        P: Problem,
        E: Evaluate<P::State>,
    {
        self.solver(problem).run()
    }
}

/// Generic best-first search.
///
/// The evaluation strategy (E) orders the frontier and picks the duplicate
/// policy; everything else is shared between the searches. A solver is
/// consumed by [Solver::run], so each one performs exactly one search.
#[derive(Debug)]
pub struct Solver<'p, P, E>
where
    P: Problem,
    E: Evaluate<P::State>,
{
    problem: &'p P,
    evaluation: E,
    policy: E::Policy,
    options: SearchOptions,
    tree: Tree<P::State>,
    frontier: Frontier<E::Score>,
    visited: Visited<P::State>,
    stats: SearchStats,
}

impl<'p, P, E> Solver<'p, P, E>
where
    P: Problem,
    E: Evaluate<P::State>,
{
    fn new(problem: &'p P, evaluation: E, options: SearchOptions) -> Self {
        Solver {
            problem,
            evaluation,
            policy: E::Policy::default(),
            options,
            tree: Tree::default(),
            frontier: Frontier::default(),
            visited: Visited::default(),
            stats: SearchStats::default(),
        }
    }

    fn exhausted(&self, source: TryReserveError) -> SearchError {
        SearchError::ResourceExhausted {
            expanded: self.stats.expanded,
            source,
        }
    }

    // Record a node as the best for its state and queue it for expansion.
    fn enqueue(&mut self, node: Node<P::State>) -> Result<()> {
        let score = self.evaluation.score(&node);
        let state = node.state().clone();
        let id = self.tree.insert(node).map_err(|e| self.exhausted(e))?;
        self.visited
            .record(state, id)
            .map_err(|e| self.exhausted(e))?;
        self.frontier
            .push(id, score)
            .map_err(|e| self.exhausted(e))?;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
        Ok(())
    }

    fn expand(&mut self, id: NodeId) -> Result<()> {
        self.stats.expanded += 1;
        let problem = self.problem;
        let state = self.tree.get(id).state().clone();

        for action in problem.actions(&state) {
            self.stats.generated += 1;
            let child = Node::child(id, self.tree.get(id), action);

            if self.visited.admits(&self.tree, &self.policy, &child) {
                self.enqueue(child)?;
            } else {
                trace!("Discarding {:?} at cost {}", child.state(), child.cost());
                self.stats.discarded += 1;
            }
        }
        Ok(())
    }

    fn progress(&self, score: &E::Score) {
        if let Some(every) = self.options.progress {
            if every > 0 && self.stats.expanded % every == 0 {
                info!(
                    "{}: expanded {} frontier {} visited {} score {:?}",
                    self.evaluation.name(),
                    self.stats.expanded,
                    self.frontier.len(),
                    self.visited.len(),
                    score
                );
            }
        }
    }

    /// Run the search to completion.
    ///
    /// Returns [Solution::failure] when the frontier runs dry without
    /// reaching a goal. Goals are only recognized when they come off the
    /// frontier, never when they are generated.
    pub fn run(mut self) -> Result<Solution<P::State>> {
        let start = self.problem.start();
        debug!("{}: searching from {:?}", self.evaluation.name(), start);
        self.enqueue(Node::root(start))?;

        while let Some((id, score)) = self.frontier.pop() {
            let node = self.tree.get(id);

            if !self.visited.is_current(node.state(), id) {
                self.stats.discarded += 1;
                continue;
            }

            if node.state().is_goal() {
                let solution = Solution::from_tree(&self.tree, id).with_stats(self.stats);
                debug!(
                    "{}: reached goal at cost {} depth {} ({:?})",
                    self.evaluation.name(),
                    solution.cost(),
                    solution.depth(),
                    self.stats
                );
                return Ok(solution);
            }

            trace!("Expanding {:?} with score {:?}", node.state(), score);
            self.expand(id)?;
            self.progress(&score);
        }

        debug!(
            "{}: frontier exhausted without a goal ({:?})",
            self.evaluation.name(),
            self.stats
        );
        Ok(Solution::failure().with_stats(self.stats))
    }
}
