//! Dense node index used inside a [`Graph`](crate::Graph).
//!
//! A graph interns every identifier it stores into a [`NodeId`]: the position of the
//! identifier in the graph's insertion order. Algorithms index their per-node scratch
//! state (visited flags, distances, parents) by `NodeId` so that a traversal needs no
//! hashing of the user's identifiers.

use std::fmt;

/// A strongly-typed index of a node within a graph.
///
/// `NodeId`s are assigned densely from 0 in insertion order, so a graph with `n` nodes
/// always uses exactly the ids `0..n`. Removing a node compacts the ids of every node
/// inserted after it: an id obtained before a [`Graph::remove_node`](crate::Graph::remove_node)
/// must be looked up again afterwards.
///
/// # Examples
///
/// ```rust
/// use dsgraph::{graph::NodeId, Graph};
///
/// let mut graph = Graph::directed();
/// graph.add_edge("A", "B");
///
/// assert_eq!(graph.node_id(&"A"), Some(NodeId::new(0)));
/// assert_eq!(graph.node_id(&"B"), Some(NodeId::new(1)));
/// assert_eq!(graph.key(NodeId::new(1)), Some(&"B"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    ///
    /// The index can be used directly to address per-node vectors sized by
    /// [`Successors::node_count`](crate::graph::Successors::node_count).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
