use std::fmt::Debug;

use super::cache::Accept;
use super::node::Node;
use crate::traits::State;

/// An evaluation strategy: how to rank nodes in the frontier,
/// and which duplicate policy keeps the ranking sound.
///
/// Combined with [crate::algorithm::Solver], each implementation
/// reproduces one classical search.
pub trait Evaluate<S>: Debug + Clone
where
    S: State,
{
    /// Lower scores are expanded first.
    type Score: Debug + Ord + Copy;

    /// Duplicate detection used alongside this evaluation.
    type Policy: Accept<S>;

    /// Name used when logging.
    fn name(&self) -> &'static str;

    /// Computed once, when the node enters the frontier.
    fn score(&self, node: &Node<S>) -> Self::Score;
}
