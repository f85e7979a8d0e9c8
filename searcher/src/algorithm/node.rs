//! Search tree records, stored in an arena and linked by index.

use std::collections::TryReserveError;

use crate::problem::Action;
use crate::traits::Cost;

/// Index of a node within its [Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One record in the search tree.
///
/// Nodes are never mutated once they are in the tree. The parent link
/// is only used to rebuild the path once a goal is found.
#[derive(Debug, Clone)]
pub struct Node<S> {
    parent: Option<NodeId>,
    depth: usize,
    cost: Cost,
    state: S,
}

impl<S> Node<S> {
    /// The node for the start state: no parent, depth 0, cost 0.
    pub fn root(state: S) -> Self {
        Self {
            parent: None,
            depth: 0,
            cost: 0,
            state,
        }
    }

    /// The node reached from `parent` (stored at `id`) by taking `action`.
    ///
    /// Costs saturate at [Cost::MAX] rather than wrapping.
    pub fn child(id: NodeId, parent: &Node<S>, action: Action<S>) -> Self {
        Self {
            parent: Some(id),
            depth: parent.depth + 1,
            cost: parent.cost.saturating_add(action.cost()),
            state: action.into_successor(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Arena holding every node generated during one search.
///
/// Nodes are only ever appended, so a [NodeId] held by the frontier or
/// the visited table stays valid until the tree is dropped.
#[derive(Debug)]
pub struct Tree<S> {
    nodes: Vec<Node<S>>,
}

impl<S> Default for Tree<S> {
    fn default() -> Self {
        Tree { nodes: Vec::new() }
    }
}

impl<S> Tree<S> {
    pub fn insert(&mut self, node: Node<S>) -> Result<NodeId, TryReserveError> {
        self.nodes.try_reserve(1)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk parent links from `id` back to the root.
    pub fn ancestry(&self, id: NodeId) -> Ancestry<'_, S> {
        Ancestry {
            tree: self,
            next: Some(id),
        }
    }
}

/// Iterator from a node up to the root of its tree.
#[derive(Debug)]
pub struct Ancestry<'t, S> {
    tree: &'t Tree<S>,
    next: Option<NodeId>,
}

impl<'t, S> Iterator for Ancestry<'t, S> {
    type Item = &'t Node<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.next?);
        self.next = node.parent;
        Some(node)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn child_accumulates() {
        let mut tree = Tree::default();
        let root = tree.insert(Node::root('a')).unwrap();

        let child = Node::child(root, tree.get(root), Action::new(3, 'b'));
        assert_eq!(child.depth(), 1);
        assert_eq!(child.cost(), 3);
        assert_eq!(child.parent(), Some(root));

        let child = tree.insert(child).unwrap();
        let grandchild = Node::child(child, tree.get(child), Action::new(2, 'c'));
        assert_eq!(grandchild.depth(), 2);
        assert_eq!(grandchild.cost(), 5);

        let leaf = tree.insert(grandchild).unwrap();
        assert_eq!(tree.len(), 3);
        let path: Vec<char> = tree.ancestry(leaf).map(|n| *n.state()).collect();
        assert_eq!(path, vec!['c', 'b', 'a']);
    }

    #[test]
    fn child_cost_saturates() {
        let mut tree = Tree::default();
        let root = tree.insert(Node::root('a')).unwrap();
        let child = Node::child(root, tree.get(root), Action::new(Cost::MAX, 'b'));
        let child = tree.insert(child).unwrap();

        let grandchild = Node::child(child, tree.get(child), Action::new(1, 'c'));
        assert_eq!(grandchild.cost(), Cost::MAX);
    }

    #[test]
    fn root() {
        let node = Node::root(7);
        assert_eq!(node.parent(), None);
        assert_eq!(node.depth(), 0);
        assert_eq!(node.cost(), 0);
    }
}
