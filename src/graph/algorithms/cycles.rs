//! Cycle detection.
//!
//! Depth-first search with two marks per node: *visited* (entered at some point) and
//! *on stack* (on the current search path). An edge into a node that is still on the
//! stack is a back-edge and closes a cycle. Searches start from every unvisited node in
//! id order, so cycles in any component are found.
//!
//! Undirected graphs store each edge in both directions; the mirrored entry of any
//! edge is a back-edge, so an undirected graph with at least one edge is reported as
//! cyclic.

use crate::graph::{NodeId, Successors};

/// Returns `true` if the graph contains a cycle.
///
/// Self-loops count as cycles.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use dsgraph::{graph::algorithms::has_cycle, Graph};
///
/// let dag = Graph::from_edges(true, [("A", "B"), ("B", "C")]);
/// assert!(!has_cycle(&dag));
///
/// let cyclic = Graph::from_edges(true, [("A", "B"), ("B", "C"), ("C", "A")]);
/// assert!(has_cycle(&cyclic));
/// ```
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    find_cycle(graph).is_some()
}

/// Finds a cycle if one exists.
///
/// # Returns
///
/// The first cycle met by the search as a closed walk: it starts and ends with the
/// node the back-edge points to, e.g. `[a, b, c, a]`. A self-loop on `a` is `[a, a]`.
/// `None` if the graph is acyclic.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn find_cycle<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut on_stack = vec![false; node_count];

    for root in (0..node_count).map(NodeId::new) {
        if visited[root.index()] {
            continue;
        }
        if let Some(cycle) = find_cycle_from(graph, root, &mut visited, &mut on_stack) {
            return Some(cycle);
        }
    }

    None
}

fn find_cycle_from<G: Successors>(
    graph: &G,
    root: NodeId,
    visited: &mut [bool],
    on_stack: &mut [bool],
) -> Option<Vec<NodeId>> {
    visited[root.index()] = true;
    on_stack[root.index()] = true;

    let mut stack = vec![(root, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let Some(&succ) = graph.successors(node).get(frame.1) else {
            on_stack[node.index()] = false;
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if !visited[succ.index()] {
            visited[succ.index()] = true;
            on_stack[succ.index()] = true;
            stack.push((succ, 0));
        } else if on_stack[succ.index()] {
            // The frames from `succ` to the top are the cycle's path
            let start = stack.iter().position(|&(n, _)| n == succ)?;
            let mut cycle: Vec<NodeId> = stack[start..].iter().map(|&(n, _)| n).collect();
            cycle.push(succ);
            return Some(cycle);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::cycles::{find_cycle, has_cycle},
        Graph, NodeId,
    };

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_three_node_cycle() {
        let graph = Graph::from_edges(true, [("A", "B"), ("B", "C"), ("C", "A")]);

        assert!(has_cycle(&graph));
        assert_eq!(find_cycle(&graph), Some(ids(&[0, 1, 2, 0])));
    }

    #[test]
    fn test_dag_has_no_cycle() {
        let graph = Graph::from_edges(true, [("A", "B"), ("B", "C")]);
        assert!(!has_cycle(&graph));
        assert_eq!(find_cycle(&graph), None);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // D is reached twice, but never while on the stack
        let graph = Graph::from_edges(true, [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_self_loop() {
        let graph = Graph::from_edges(true, [("A", "B"), ("B", "B")]);
        assert_eq!(find_cycle(&graph), Some(ids(&[1, 1])));
    }

    #[test]
    fn test_cycle_in_later_component() {
        let mut graph = Graph::from_edges(true, [("A", "B")]);
        graph.add_edge("C", "D");
        graph.add_edge("D", "C");

        assert_eq!(find_cycle(&graph), Some(ids(&[2, 3, 2])));
    }

    #[test]
    fn test_cycle_reached_after_finished_branch() {
        // B finishes before C closes the cycle back to A
        let graph = Graph::from_edges(true, [("A", "B"), ("A", "C"), ("C", "A")]);
        assert_eq!(find_cycle(&graph), Some(ids(&[0, 2, 0])));
    }

    #[test]
    fn test_undirected_edge_is_cyclic() {
        let graph = Graph::from_edges(false, [("A", "B")]);
        assert!(has_cycle(&graph));

        let mut isolated: Graph<&str> = Graph::undirected();
        isolated.add_node("A");
        assert!(!has_cycle(&isolated));
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u8> = Graph::directed();
        assert!(!has_cycle(&graph));
    }
}
