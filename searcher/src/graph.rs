//! Weighted directed graphs as search problems.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use crate::problem::{Action, Actions, Problem};
use crate::traits::{Cost, HeuristicState, State};

/// A weighted directed graph, with goal nodes and optional
/// heuristic estimates attached to nodes.
#[derive(Debug, Clone)]
pub struct Graph<N>
where
    N: Debug + Clone + Eq + Hash,
{
    edges: HashMap<N, Vec<(N, Cost)>>,
    fitness: HashMap<N, Cost>,
    goals: HashSet<N>,
}

impl<N> Default for Graph<N>
where
    N: Debug + Clone + Eq + Hash,
{
    fn default() -> Self {
        Graph {
            edges: HashMap::new(),
            fitness: HashMap::new(),
            goals: HashSet::new(),
        }
    }
}

impl<N> Graph<N>
where
    N: Debug + Clone + Eq + Hash,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without any edges.
    pub fn add_node(&mut self, node: N) {
        self.edges.entry(node).or_insert_with(Vec::new);
    }

    /// Add an edge from `origin` to `destination`.
    ///
    /// Edges are kept in insertion order, which is the order
    /// actions are offered to the search.
    pub fn connect(&mut self, origin: N, destination: N, cost: Cost) {
        self.add_node(destination.clone());
        self.edges
            .entry(origin)
            .or_insert_with(Vec::new)
            .push((destination, cost));
    }

    /// Add edges in both directions.
    pub fn connect_both(&mut self, a: N, b: N, cost: Cost) {
        self.connect(a.clone(), b.clone(), cost);
        self.connect(b, a, cost);
    }

    pub fn set_fitness(&mut self, node: N, fitness: Cost) {
        self.add_node(node.clone());
        self.fitness.insert(node, fitness);
    }

    pub fn mark_goal(&mut self, node: N) {
        self.add_node(node.clone());
        self.goals.insert(node);
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }

    /// Iterate through the edges leaving this node.
    pub fn edges<'g>(&'g self, node: &N) -> impl Iterator<Item = (&'g N, Cost)> + 'g {
        self.edges
            .get(node)
            .into_iter()
            .flat_map(|e| e.iter().map(|(n, c)| (n, *c)))
    }

    /// Search this graph beginning at `start`.
    pub fn problem(&self, start: N) -> GraphProblem<'_, N> {
        GraphProblem { graph: self, start }
    }
}

/// A node of a [Graph], as seen by the search.
#[derive(Clone)]
pub struct Waypoint<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    node: N,
    graph: &'g Graph<N>,
}

impl<'g, N> Waypoint<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    pub fn node(&self) -> &N {
        &self.node
    }
}

impl<'g, N> Debug for Waypoint<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.node)
    }
}

impl<'g, N> PartialEq for Waypoint<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.node.eq(&other.node)
    }
}

impl<'g, N> Eq for Waypoint<'g, N> where N: Debug + Clone + Eq + Hash {}

impl<'g, N> Hash for Waypoint<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state)
    }
}

impl<'g, N> State for Waypoint<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    fn is_goal(&self) -> bool {
        self.graph.goals.contains(&self.node)
    }
}

impl<'g, N> HeuristicState for Waypoint<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    /// Nodes without an estimate are assumed to be right next to a goal.
    fn fitness(&self) -> Cost {
        self.graph.fitness.get(&self.node).copied().unwrap_or(0)
    }
}

/// Search problem over a [Graph] from a fixed start node.
#[derive(Debug, Clone)]
pub struct GraphProblem<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    graph: &'g Graph<N>,
    start: N,
}

impl<'g, N> Problem for GraphProblem<'g, N>
where
    N: Debug + Clone + Eq + Hash,
{
    type State = Waypoint<'g, N>;

    fn start(&self) -> Self::State {
        Waypoint {
            node: self.start.clone(),
            graph: self.graph,
        }
    }

    fn actions<'a>(&'a self, state: &'a Self::State) -> Actions<'a, Self::State> {
        let graph = self.graph;
        Box::new(graph.edges(&state.node).map(move |(n, cost)| {
            Action::new(
                cost,
                Waypoint {
                    node: n.clone(),
                    graph,
                },
            )
        }))
    }
}

/// Graphs shared by the search tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::Graph;

    /// A -> B (1), A -> C (5), B -> D (1), C -> D (1); goal D.
    pub(crate) fn diamond() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.connect("A", "B", 1);
        graph.connect("A", "C", 5);
        graph.connect("B", "D", 1);
        graph.connect("C", "D", 1);
        graph.set_fitness("A", 2);
        graph.set_fitness("B", 1);
        graph.set_fitness("C", 1);
        graph.set_fitness("D", 0);
        graph.mark_goal("D");
        graph
    }

    /// The first path generated to C (directly, cost 5) is not the cheapest
    /// (through B, cost 2). Goal E hangs off C.
    pub(crate) fn detour() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.connect("A", "C", 5);
        graph.connect("A", "B", 1);
        graph.connect("B", "C", 1);
        graph.connect("C", "E", 1);
        graph.mark_goal("E");
        graph
    }

    /// Admissible but inconsistent heuristic: A looks far from the goal,
    /// so C is first reached through the dearer B. Goal G.
    pub(crate) fn misleading() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.connect("S", "A", 1);
        graph.connect("S", "B", 3);
        graph.connect("A", "C", 1);
        graph.connect("B", "C", 1);
        graph.connect("C", "G", 3);
        graph.set_fitness("A", 4);
        graph.mark_goal("G");
        graph
    }

    /// Goal Z can't be reached from A.
    pub(crate) fn disconnected() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.connect_both("A", "B", 1);
        graph.connect_both("B", "C", 1);
        graph.connect("Y", "Z", 1);
        graph.mark_goal("Z");
        graph
    }

    /// A square grid, `size` on a side, with unit-cost moves between
    /// neighbors and Manhattan distance to the far corner as heuristic.
    pub(crate) fn grid(size: i32) -> Graph<(i32, i32)> {
        let mut graph = Graph::new();
        let goal = (size - 1, size - 1);
        for x in 0..size {
            for y in 0..size {
                if x + 1 < size {
                    graph.connect_both((x, y), (x + 1, y), 1);
                }
                if y + 1 < size {
                    graph.connect_both((x, y), (x, y + 1), 1);
                }
                graph.set_fitness((x, y), ((goal.0 - x) + (goal.1 - y)) as usize);
            }
        }
        graph.mark_goal(goal);
        graph
    }
}
