//! Topological ordering.

use crate::graph::{algorithms::traversal::postorder_into, NodeId, Successors};

/// Computes a topological ordering of every node in the graph.
///
/// Runs a post-order depth-first search from each unvisited node in id order and
/// returns the reverse of the finishing order, so disconnected parts are covered too.
///
/// The graph is not checked for cycles. On a DAG every edge `(u, v)` has `u` before
/// `v` in the result; on a cyclic graph the result still contains every node once but
/// is not a valid topological order. Pair with
/// [`has_cycle`](crate::graph::algorithms::has_cycle) when the input may be cyclic.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use dsgraph::{graph::algorithms::topological_sort, Graph};
///
/// let graph = Graph::from_edges(true, [("shirt", "tie"), ("tie", "jacket"), ("pants", "shoes")]);
/// let order: Vec<&str> = topological_sort(&graph)
///     .into_iter()
///     .map(|id| *graph.key(id).unwrap())
///     .collect();
/// assert_eq!(order, vec!["pants", "shoes", "shirt", "tie", "jacket"]);
/// ```
pub fn topological_sort<G: Successors>(graph: &G) -> Vec<NodeId> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut finished = Vec::with_capacity(node_count);

    for root in (0..node_count).map(NodeId::new) {
        postorder_into(graph, root, &mut visited, &mut finished);
    }

    finished.reverse();
    finished
}
