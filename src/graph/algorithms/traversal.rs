//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal over any
//! [`Successors`] implementation. None of the depth-first routines recurse: each keeps
//! an explicit stack of frames `(node, next successor position)`, which reproduces the
//! visiting order of a recursive depth-first search exactly while keeping memory use
//! bounded by the node count instead of the call stack.
//!
//! # Algorithms
//!
//! - [`dfs`] - Depth-first search (pre-order)
//! - [`bfs`] - Breadth-first search
//! - [`postorder`] - Depth-first search with post-order visitation
//! - [`reverse_postorder`] - Reverse post-order
//!
//! # Iteration vs Collection
//!
//! The [`dfs`] and [`bfs`] functions return iterators for lazy evaluation, avoiding
//! unnecessary work when only part of the traversal is needed. [`postorder`] and
//! [`reverse_postorder`] return vectors since the order requires full traversal anyway.

use std::collections::VecDeque;

use crate::graph::{NodeId, Successors};

/// Depth-first search iterator over graph nodes.
///
/// Nodes are yielded in pre-order, each reachable node exactly once, following
/// successors in their stored order. The sequence is identical to that of a recursive
/// DFS that marks a node when it is entered.
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    /// Start node, yielded on the first call
    pending: Option<NodeId>,
    /// Active path as `(node, next successor position)` frames
    stack: Vec<(NodeId, usize)>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return DfsIterator {
                graph,
                pending: None,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; node_count];
        visited[start.index()] = true;

        DfsIterator {
            graph,
            pending: Some(start),
            stack: Vec::new(),
            visited,
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            self.stack.push((start, 0));
            return Some(start);
        }

        let graph = self.graph;
        loop {
            let frame = self.stack.last_mut()?;
            let Some(&succ) = graph.successors(frame.0).get(frame.1) else {
                self.stack.pop();
                continue;
            };
            frame.1 += 1;

            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.stack.push((succ, 0));
                return Some(succ);
            }
        }
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// Nodes not reachable from `start` are not visited. A `start` outside the graph yields
/// an empty iterator.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited flags and the frame stack
///
/// # Examples
///
/// ```rust
/// use dsgraph::{graph::algorithms::dfs, Graph};
///
/// let mut graph = Graph::directed();
/// graph.add_edge("A", "B");
/// graph.add_edge("A", "C");
/// graph.add_edge("B", "D");
///
/// let a = graph.node_id(&"A").unwrap();
/// let order: Vec<&str> = dfs(&graph, a).map(|id| *graph.key(id).unwrap()).collect();
/// assert_eq!(order, vec!["A", "B", "D", "C"]);
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph nodes.
///
/// Visits every reachable node exactly once, all nodes at distance d before any node
/// at distance d+1. Ties within a level follow successor order.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return BfsIterator {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; node_count];
        visited[start.index()] = true;

        let mut queue = VecDeque::new();
        queue.push_back(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for &succ in self.graph.successors(node) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from the given node.
///
/// A `start` outside the graph yields an empty iterator.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited flags and queue
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Appends to `out`, in pre-order, every node reachable from `root` that is not yet
/// marked in `visited`, marking them as it goes.
///
/// Sharing `visited` across calls lets callers partition a graph by repeated searches.
pub(crate) fn preorder_into<G: Successors>(
    graph: &G,
    root: NodeId,
    visited: &mut [bool],
    out: &mut Vec<NodeId>,
) {
    if visited[root.index()] {
        return;
    }
    visited[root.index()] = true;
    out.push(root);

    let mut stack = vec![(root, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let Some(&succ) = graph.successors(frame.0).get(frame.1) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if !visited[succ.index()] {
            visited[succ.index()] = true;
            out.push(succ);
            stack.push((succ, 0));
        }
    }
}

/// Appends to `out`, in post-order, every node reachable from `root` that is not yet
/// marked in `visited`.
///
/// A node is appended only after all of its unvisited descendants.
pub(crate) fn postorder_into<G: Successors>(
    graph: &G,
    root: NodeId,
    visited: &mut [bool],
    out: &mut Vec<NodeId>,
) {
    if visited[root.index()] {
        return;
    }
    visited[root.index()] = true;

    let mut stack = vec![(root, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let Some(&succ) = graph.successors(node).get(frame.1) else {
            stack.pop();
            out.push(node);
            continue;
        };
        frame.1 += 1;

        if !visited[succ.index()] {
            visited[succ.index()] = true;
            stack.push((succ, 0));
        }
    }
}

/// Computes the postorder traversal of nodes reachable from the start.
///
/// In postorder, a node is visited after all its descendants have been visited.
///
/// # Returns
///
/// A vector of `NodeId` in postorder, empty if `start` is outside the graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Vec::new();
    }

    let mut visited = vec![false; node_count];
    let mut result = Vec::with_capacity(node_count);
    postorder_into(graph, start, &mut visited, &mut result);
    result
}

/// Computes the reverse postorder traversal of nodes reachable from the start.
///
/// In a DAG, reverse postorder places every node before all of its successors.
pub fn reverse_postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut result = postorder(graph, start);
    result.reverse();
    result
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::traversal::{bfs, dfs, postorder, reverse_postorder},
        Graph, NodeId,
    };

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    fn create_linear_graph() -> Graph<&'static str> {
        Graph::from_edges(true, [("A", "B"), ("B", "C")])
    }

    fn create_diamond_graph() -> Graph<&'static str> {
        Graph::from_edges(true, [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
    }

    fn create_cycle_graph() -> Graph<&'static str> {
        Graph::from_edges(true, [("A", "B"), ("B", "C"), ("C", "A")])
    }

    fn create_tree_graph() -> Graph<&'static str> {
        //       A
        //      / \
        //     B   C
        //    / \   \
        //   D   E   F
        Graph::from_edges(
            true,
            [("A", "B"), ("A", "C"), ("B", "D"), ("B", "E"), ("C", "F")],
        )
    }

    #[test]
    fn test_dfs_linear() {
        let graph = create_linear_graph();
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_dfs_tree_is_preorder() {
        let graph = create_tree_graph();
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();

        // A B D E C F
        assert_eq!(order, ids(&[0, 1, 3, 4, 2, 5]));
    }

    #[test]
    fn test_dfs_matches_recursive_order() {
        // C is a successor of both A and B. Marking on push would leave C behind D;
        // a recursive search enters C through B first.
        let graph = Graph::from_edges(true, [("A", "B"), ("A", "C"), ("B", "C"), ("B", "D")]);
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();

        // A B C D
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_dfs_cycle() {
        let graph = create_cycle_graph();
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_dfs_disconnected() {
        let mut graph = Graph::from_edges(true, [("A", "B")]);
        graph.add_node("C");

        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1]));
    }

    #[test]
    fn test_dfs_invalid_start() {
        let graph = create_linear_graph();
        assert_eq!(dfs(&graph, NodeId::new(10)).count(), 0);
    }

    #[test]
    fn test_bfs_diamond() {
        let graph = create_diamond_graph();
        let order: Vec<NodeId> = bfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_bfs_tree_levels() {
        let graph = create_tree_graph();
        let order: Vec<NodeId> = bfs(&graph, NodeId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_bfs_invalid_start() {
        let graph = create_linear_graph();
        assert_eq!(bfs(&graph, NodeId::new(3)).count(), 0);
    }

    #[test]
    fn test_postorder_linear() {
        let graph = create_linear_graph();
        assert_eq!(postorder(&graph, NodeId::new(0)), ids(&[2, 1, 0]));
    }

    #[test]
    fn test_postorder_diamond() {
        let graph = create_diamond_graph();
        // A -> B -> D finishes D, then B, then C (D already done), then A
        assert_eq!(postorder(&graph, NodeId::new(0)), ids(&[3, 1, 2, 0]));
    }

    #[test]
    fn test_reverse_postorder_tree() {
        let graph = create_tree_graph();
        let order = reverse_postorder(&graph, NodeId::new(0));

        assert_eq!(order.len(), 6);
        assert_eq!(order[0], NodeId::new(0));

        let pos = |n: usize| order.iter().position(|&x| x == NodeId::new(n)).unwrap();
        assert!(pos(0) < pos(1));
        assert!(pos(1) < pos(3));
        assert!(pos(2) < pos(5));
    }

    #[test]
    fn test_reverse_postorder_with_cycle() {
        let graph = create_cycle_graph();
        assert_eq!(reverse_postorder(&graph, NodeId::new(0)).len(), 3);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let graph = Graph::from_edges(true, [(0, 0), (0, 1), (0, 1)]);
        let start = NodeId::new(0);

        assert_eq!(dfs(&graph, start).collect::<Vec<_>>(), ids(&[0, 1]));
        assert_eq!(bfs(&graph, start).collect::<Vec<_>>(), ids(&[0, 1]));
        assert_eq!(postorder(&graph, start), ids(&[1, 0]));
    }

    #[test]
    fn test_iterator_early_termination() {
        let graph = create_tree_graph();
        let partial: Vec<NodeId> = dfs(&graph, NodeId::new(0)).take(3).collect();
        assert_eq!(partial, ids(&[0, 1, 3]));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let edges = (0..200_000u32).map(|i| (i, i + 1));
        let graph = Graph::from_edges(true, edges);

        assert_eq!(dfs(&graph, NodeId::new(0)).count(), 200_001);
        assert_eq!(postorder(&graph, NodeId::new(0))[0], NodeId::new(200_000));
    }
}
