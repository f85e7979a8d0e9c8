//! Generalized best-first search algorithms.
//!
//! To use these search algorithms, implement [State] for the
//! configurations of your problem, and either [Problem] to enumerate
//! the moves available from each state, or [Transitions] on the state
//! itself (wrapped in a [StateSpace]). Greedy and A* searches also
//! need [HeuristicState].
//!
//! Breadth-first, depth-first, uniform-cost, greedy and A* searches all
//! share one [algorithm::Solver]; they differ only in how the frontier
//! is ranked and how repeated states are treated.

pub mod algorithm;
mod errors;
pub mod graph;
mod problem;
mod solution;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use problem::{Action, Actions, Problem, StateSpace};
pub use solution::Solution;
pub use traits::{Cost, HeuristicState, State, Transitions};

pub use algorithm::astar::{astar, AStar};
pub use algorithm::basic::{bfs, dfs, BreadthFirst, DepthFirst};
pub use algorithm::dijkstra::{dijkstra, UniformCost};
pub use algorithm::greedy::{greedy, Greedy};
pub use algorithm::{Algorithm, SearchOptions, SearchStats};

/// Breadth-first search factory.
pub const BREADTH_FIRST: Algorithm<BreadthFirst> = Algorithm::new(BreadthFirst);

/// Depth-first search factory.
pub const DEPTH_FIRST: Algorithm<DepthFirst> = Algorithm::new(DepthFirst);

/// Uniform-cost (Dijkstra) search factory.
pub const UNIFORM_COST: Algorithm<UniformCost> = Algorithm::new(UniformCost);

/// Greedy best-first search factory.
pub const GREEDY: Algorithm<Greedy> = Algorithm::new(Greedy);

/// A* search factory.
pub const ASTAR: Algorithm<AStar> = Algorithm::new(AStar);
