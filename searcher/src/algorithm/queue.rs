//! The frontier: nodes discovered but not yet expanded.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::{BinaryHeap, TryReserveError};
use std::fmt::Debug;

use super::node::NodeId;

/// Frontier entry. Ordered so that the lowest score pops first
/// out of a max-heap, with earlier insertions winning ties.
#[derive(Debug)]
struct Ranked<K> {
    score: K,
    sequence: u64,
    node: NodeId,
}

impl<K> PartialEq for Ranked<K>
where
    K: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for Ranked<K> where K: Ord {}

impl<K> Ord for Ranked<K>
where
    K: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<K> PartialOrd for Ranked<K>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue of nodes.
///
/// Scores are fixed when a node is pushed; nodes are immutable so
/// there is never a need to re-rank an entry.
#[derive(Debug)]
pub struct Frontier<K>
where
    K: Ord,
{
    queue: BinaryHeap<Ranked<K>>,
    sequence: u64,
}

impl<K> Default for Frontier<K>
where
    K: Ord,
{
    fn default() -> Self {
        Frontier {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<K> Frontier<K>
where
    K: Ord + Debug,
{
    pub fn push(&mut self, node: NodeId, score: K) -> Result<(), TryReserveError> {
        self.queue.try_reserve(1)?;
        self.queue.push(Ranked {
            score,
            sequence: self.sequence,
            node,
        });
        self.sequence += 1;
        Ok(())
    }

    /// Remove the node with the lowest score, along with that score.
    pub fn pop(&mut self) -> Option<(NodeId, K)> {
        self.queue.pop().map(|r| (r.node, r.score))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
