//! Unit-weight shortest paths.
//!
//! Every edge costs exactly 1, so both routines here are breadth-first searches:
//!
//! - [`shortest_path`] - One minimum-edge path between two nodes
//! - [`unit_distances`] - Minimum edge count from a start node to every node
//!
//! Neither routine accepts weights. [`unit_distances`] is what the graph API also
//! exposes as `dijkstra`: a FIFO relaxation that coincides with Dijkstra's algorithm
//! only because all weights are equal.

use std::collections::VecDeque;

use crate::graph::{NodeId, Successors};

/// Finds a path with the fewest edges from `start` to `end`.
///
/// Breadth-first search that checks every discovered successor against `end`, so the
/// first path found is a shortest one. Among several shortest paths, the one reached
/// first in successor order wins. `start == end` yields the single-node path.
///
/// # Returns
///
/// The path including both endpoints, or `None` if `end` is unreachable or either
/// node is outside the graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the parent table and queue
pub fn shortest_path<G: Successors>(graph: &G, start: NodeId, end: NodeId) -> Option<Vec<NodeId>> {
    let node_count = graph.node_count();
    if start.index() >= node_count || end.index() >= node_count {
        return None;
    }
    if start == end {
        return Some(vec![start]);
    }

    let mut parent: Vec<Option<NodeId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    visited[start.index()] = true;

    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &succ in graph.successors(node) {
            if succ == end {
                let mut path = vec![end, node];
                let mut current = node;
                while let Some(prev) = parent[current.index()] {
                    path.push(prev);
                    current = prev;
                }
                path.reverse();
                return Some(path);
            }

            if !visited[succ.index()] {
                visited[succ.index()] = true;
                parent[succ.index()] = Some(node);
                queue.push_back(succ);
            }
        }
    }

    None
}

/// Computes the minimum number of edges from `start` to every node.
///
/// A FIFO queue drives relaxation: whenever `dist[node] + 1` improves a successor's
/// distance, the successor is updated and enqueued. With unit weights the first
/// assignment of every node is already minimal.
///
/// # Returns
///
/// One entry per node, indexed by [`NodeId`]: `Some(hops)` for reachable nodes
/// (`Some(0)` for `start`) and `None` for the rest. All entries are `None` if `start`
/// is outside the graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn unit_distances<G: Successors>(graph: &G, start: NodeId) -> Vec<Option<usize>> {
    let node_count = graph.node_count();
    let mut distances: Vec<Option<usize>> = vec![None; node_count];
    if start.index() >= node_count {
        return distances;
    }

    distances[start.index()] = Some(0);
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        let Some(hops) = distances[node.index()] else {
            continue;
        };
        let candidate = hops + 1;

        for &succ in graph.successors(node) {
            let improves = match distances[succ.index()] {
                Some(current) => candidate < current,
                None => true,
            };
            if improves {
                distances[succ.index()] = Some(candidate);
                queue.push_back(succ);
            }
        }
    }

    distances
}
