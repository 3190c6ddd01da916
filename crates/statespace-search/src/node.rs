//! Search-tree nodes stored in an append-only arena.
//!
//! Children refer to their parent by [`NodeId`] rather than by reference, so
//! the tree is a forest of parent chains that lives exactly as long as the
//! arena that owns it.

use std::fmt;

/// Handle to a [`Node`] inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One point in the search tree.
///
/// `cost` is the accumulated path cost from the root and `heuristic` the
/// estimated remaining cost. Both are zero for depth-first and breadth-first
/// search, where nodes are never compared.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<S> {
    state: S,
    parent: Option<NodeId>,
    cost: f64,
    heuristic: f64,
    depth: u32,
}

impl<S> Node<S> {
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node that discovered this one, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// A* ordering key: `cost + heuristic`.
    #[inline]
    pub fn score(&self) -> f64 {
        self.cost + self.heuristic
    }
}

/// Append-only storage for the nodes of one search.
#[derive(Clone, Debug)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NodeArena<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert the root node of a search.
    pub fn push_root(&mut self, state: S, heuristic: f64) -> NodeId {
        self.insert(Node {
            state,
            parent: None,
            cost: 0.0,
            heuristic,
            depth: 0,
        })
    }

    /// Insert a node discovered from `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena.
    pub fn push_child(&mut self, parent: NodeId, state: S, cost: f64, heuristic: f64) -> NodeId {
        let depth = self.nodes[parent.index()].depth + 1;
        self.insert(Node {
            state,
            parent: Some(parent),
            cost,
            heuristic,
            depth,
        })
    }

    fn insert(&mut self, node: Node<S>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Get a node, or `None` if `id` is not from this arena.
    pub fn get(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consume the arena, yielding every state in creation order.
    pub(crate) fn into_states(self) -> impl Iterator<Item = S> {
        self.nodes.into_iter().map(|n| n.state)
    }

    /// Iterate over `(NodeId, &Node)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i), n))
    }
}

impl<S> std::ops::Index<NodeId> for NodeArena<S> {
    type Output = Node<S>;

    fn index(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.index()]
    }
}
