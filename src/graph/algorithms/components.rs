//! Component analysis.
//!
//! - [`connected_components`] - Partition by repeated depth-first reachability
//! - [`strongly_connected_components`] - Tarjan's algorithm
//!
//! On an undirected graph both coincide with the usual connected components. On a
//! directed graph [`connected_components`] follows outgoing edges only: a node that is
//! reachable from an earlier component's root joins that component, even when the
//! two are not mutually reachable. Use [`strongly_connected_components`] for mutual
//! reachability.

use crate::graph::{algorithms::traversal::preorder_into, NodeId, Successors};

/// Partitions the nodes by depth-first reachability.
///
/// For every node not yet assigned, in id order, a new component is started and every
/// unassigned node reachable from it is collected in pre-order.
///
/// # Returns
///
/// Components in the order their roots were found, each listing nodes in discovery
/// order. Every node appears in exactly one component.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use dsgraph::{graph::{algorithms::connected_components, NodeId}, Graph};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge("A", "B");
/// graph.add_edge("C", "D");
///
/// let components = connected_components(&graph);
/// assert_eq!(
///     components,
///     vec![vec![NodeId::new(0), NodeId::new(1)], vec![NodeId::new(2), NodeId::new(3)]]
/// );
/// ```
pub fn connected_components<G: Successors>(graph: &G) -> Vec<Vec<NodeId>> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut components = Vec::new();

    for root in (0..node_count).map(NodeId::new) {
        if visited[root.index()] {
            continue;
        }
        let mut component = Vec::new();
        preorder_into(graph, root, &mut visited, &mut component);
        components.push(component);
    }

    components
}

/// Computes the strongly connected components of a directed graph.
///
/// Uses Tarjan's algorithm with a single depth-first pass driven by an explicit frame
/// stack. Every node receives a discovery index and a lowlink (the smallest index
/// reachable through its subtree and one back-edge); a node whose lowlink equals its
/// index is the root of a component.
///
/// # Returns
///
/// SCCs in **reverse topological order**: if an edge leads from SCC A to SCC B, B
/// appears before A. Inside an SCC, nodes are listed in the order they are popped off
/// Tarjan's stack.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn strongly_connected_components<G: Successors>(graph: &G) -> Vec<Vec<NodeId>> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    let mut state = TarjanState::new(node_count);
    for root in (0..node_count).map(NodeId::new) {
        if state.index[root.index()].is_none() {
            state.strongconnect(graph, root);
        }
    }

    state.sccs
}

/// Internal state for Tarjan's algorithm.
struct TarjanState {
    /// Discovery index for each node (None if not yet visited)
    index: Vec<Option<usize>>,
    /// Lowlink value for each node
    lowlink: Vec<usize>,
    /// Whether a node is currently on the component stack
    on_stack: Vec<bool>,
    /// Nodes whose component is not decided yet
    stack: Vec<NodeId>,
    /// Next discovery index
    current_index: usize,
    /// Collected SCCs
    sccs: Vec<Vec<NodeId>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    fn discover(&mut self, v: NodeId) -> usize {
        let idx = self.current_index;
        self.index[v.index()] = Some(idx);
        self.lowlink[v.index()] = idx;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[v.index()] = true;
        idx
    }

    fn strongconnect<G: Successors>(&mut self, graph: &G, root: NodeId) {
        self.discover(root);
        let mut frames = vec![(root, 0usize)];

        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if let Some(&w) = graph.successors(v).get(frame.1) {
                frame.1 += 1;
                match self.index[w.index()] {
                    None => {
                        self.discover(w);
                        frames.push((w, 0));
                    }
                    Some(w_index) if self.on_stack[w.index()] => {
                        self.lowlink[v.index()] = self.lowlink[v.index()].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All successors of v are done
            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                self.lowlink[parent.index()] =
                    self.lowlink[parent.index()].min(self.lowlink[v.index()]);
            }

            if Some(self.lowlink[v.index()]) == self.index[v.index()] {
                let mut scc = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w.index()] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::graph::{
        algorithms::components::{connected_components, strongly_connected_components},
        Graph, NodeId,
    };

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_components_sample_is_single() {
        let graph = Graph::from_edges(
            true,
            [
                ("A", "B"),
                ("A", "C"),
                ("B", "C"),
                ("C", "A"),
                ("C", "D"),
                ("D", "D"),
            ],
        );
        assert_eq!(connected_components(&graph), vec![ids(&[0, 1, 2, 3])]);
    }

    #[test]
    fn test_components_directed_follow_outgoing_edges() {
        // B -> A: A is found first and cannot reach B
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_node("A");
        graph.add_edge("B", "A");

        assert_eq!(connected_components(&graph), vec![ids(&[0]), ids(&[1])]);
    }

    #[test]
    fn test_components_partition_nodes() {
        let mut graph = Graph::from_edges(false, [(1, 2), (3, 4), (4, 5)]);
        graph.add_node(6);

        let components = connected_components(&graph);
        assert_eq!(components.len(), 3);

        let all: Vec<NodeId> = components.iter().flatten().copied().collect();
        let unique: HashSet<NodeId> = all.iter().copied().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_scc_empty_graph() {
        let graph: Graph<u8> = Graph::directed();
        assert!(strongly_connected_components(&graph).is_empty());
    }

    #[test]
    fn test_scc_linear_chain() {
        let graph = Graph::from_edges(true, [('A', 'B'), ('B', 'C')]);
        // Reverse topological order: C, B, A
        assert_eq!(
            strongly_connected_components(&graph),
            vec![ids(&[2]), ids(&[1]), ids(&[0])]
        );
    }

    #[test]
    fn test_scc_simple_cycle() {
        let graph = Graph::from_edges(true, [('A', 'B'), ('B', 'C'), ('C', 'A')]);
        let sccs = strongly_connected_components(&graph);

        assert_eq!(sccs.len(), 1);
        let members: HashSet<NodeId> = sccs[0].iter().copied().collect();
        assert_eq!(members, ids(&[0, 1, 2]).into_iter().collect());
    }

    #[test]
    fn test_scc_two_cycles_joined() {
        // {A, B} -> {C, D}
        let graph = Graph::from_edges(
            true,
            [('A', 'B'), ('B', 'A'), ('B', 'C'), ('C', 'D'), ('D', 'C')],
        );
        let sccs = strongly_connected_components(&graph);

        assert_eq!(sccs.len(), 2);
        let first: HashSet<NodeId> = sccs[0].iter().copied().collect();
        let second: HashSet<NodeId> = sccs[1].iter().copied().collect();
        assert_eq!(first, ids(&[2, 3]).into_iter().collect());
        assert_eq!(second, ids(&[0, 1]).into_iter().collect());
    }

    #[test]
    fn test_scc_deep_chain() {
        let graph = Graph::from_edges(true, (0..100_000u32).map(|i| (i, i + 1)));
        assert_eq!(strongly_connected_components(&graph).len(), 100_001);
    }
}
