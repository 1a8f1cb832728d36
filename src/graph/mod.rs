//! Adjacency-list graph and its algorithms.
//!
//! This module provides [`Graph`], a mutable directed or undirected graph over arbitrary
//! hashable identifiers, and the classic algorithms that operate on it.
//!
//! # Architecture
//!
//! The graph is split into two layers:
//!
//! - **Storage** ([`Graph`]): interns every identifier into a dense [`NodeId`] in
//!   insertion order and keeps one ordered neighbor sequence per node.
//! - **Algorithms** ([`algorithms`]): operate purely on `NodeId`s through the
//!   [`Successors`] trait, using `Vec<bool>`-style scratch state indexed by node.
//!
//! The algorithm entry points on [`Graph`] translate identifiers to `NodeId`s, run the
//! index-level algorithm and map the result back to identifiers.
//!
//! # Ordering Guarantees
//!
//! Nodes are enumerated in insertion order and neighbors in edge insertion order. Every
//! algorithm follows that order, so paths, orderings and components are reproducible.
//!
//! # Examples
//!
//! ```rust
//! use dsgraph::Graph;
//!
//! let mut graph = Graph::directed();
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//!
//! assert_eq!(graph.topological_sort(), vec!["A", "B", "C"]);
//! assert!(!graph.is_cyclic());
//!
//! graph.add_edge("C", "A");
//! assert_eq!(graph.find_cycle(), Some(vec!["A", "B", "C", "A"]));
//! ```

pub mod algorithms;
mod analysis;
mod container;
mod distance;
mod matrix;
mod node;

pub use container::Graph;
pub use distance::Distance;
pub use matrix::AdjacencyMatrix;
pub use node::NodeId;

/// Read-only access to the successor lists of a graph.
///
/// This is the seam between graph storage and the algorithms in [`algorithms`]: every
/// algorithm is generic over `Successors` and never touches node identifiers. Node ids
/// are dense, so implementors must accept every id in `0..node_count()`.
pub trait Successors {
    /// Returns the number of nodes, which bounds every valid [`NodeId`].
    fn node_count(&self) -> usize;

    /// Returns the successors of `node` in edge insertion order.
    ///
    /// Parallel edges appear once per edge. Ids outside `0..node_count()` yield an
    /// empty slice.
    fn successors(&self, node: NodeId) -> &[NodeId];
}
