//! Breadth-first spanning trees.

use std::collections::VecDeque;

use crate::graph::{NodeId, Successors};

/// Collects the tree edges of a breadth-first search from `root`.
///
/// A node is marked when it is discovered, so every reachable node other than `root`
/// gets exactly one parent: the node whose successor list reached it first. The result
/// therefore has `reachable - 1` edges and contains no cycle.
///
/// This is a breadth-first spanning tree, not a minimum spanning tree: edges carry no
/// weight, and the tree only covers nodes reachable from `root`.
///
/// # Returns
///
/// `(parent, child)` pairs in discovery order. Empty if `root` is outside the graph or
/// has no successors.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use dsgraph::{graph::{algorithms::bfs_tree, NodeId}, Graph};
///
/// let graph = Graph::from_edges(true, [("A", "B"), ("A", "C"), ("B", "C")]);
/// let tree = bfs_tree(&graph, NodeId::new(0));
/// assert_eq!(
///     tree,
///     vec![(NodeId::new(0), NodeId::new(1)), (NodeId::new(0), NodeId::new(2))]
/// );
/// ```
pub fn bfs_tree<G: Successors>(graph: &G, root: NodeId) -> Vec<(NodeId, NodeId)> {
    let node_count = graph.node_count();
    if root.index() >= node_count {
        return Vec::new();
    }

    let mut visited = vec![false; node_count];
    visited[root.index()] = true;

    let mut tree = Vec::new();
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        for &succ in graph.successors(node) {
            if !visited[succ.index()] {
                visited[succ.index()] = true;
                tree.push((node, succ));
                queue.push_back(succ);
            }
        }
    }

    tree
}
