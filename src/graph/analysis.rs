//! Identifier-level algorithm entry points on [`Graph`].
//!
//! Each method resolves identifiers to [`NodeId`]s, runs the matching routine from
//! [`algorithms`] and maps the result back to identifiers.

use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    graph::{algorithms, AdjacencyMatrix, Distance, Graph, NodeId},
    Error, Result,
};

impl<N> Graph<N>
where
    N: Hash + Eq + Clone + Debug,
{
    /// Returns every node reachable from `start` with a depth-first search, `start`
    /// included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsgraph::Graph;
    ///
    /// let graph = Graph::from_edges(true, [("A", "B"), ("B", "C"), ("D", "A")]);
    /// let reachable = graph.depth_first_search(&"A")?;
    ///
    /// assert_eq!(reachable.len(), 3);
    /// assert!(!reachable.contains(&"D"));
    /// # Ok::<(), dsgraph::Error>(())
    /// ```
    pub fn depth_first_search(&self, start: &N) -> Result<HashSet<N>> {
        Ok(self.dfs_order(start)?.into_iter().collect())
    }

    /// Returns every node reachable from `start` with a breadth-first search, `start`
    /// included.
    ///
    /// The reachable set is always equal to that of
    /// [`Graph::depth_first_search`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
    pub fn breadth_first_search(&self, start: &N) -> Result<HashSet<N>> {
        Ok(self.bfs_order(start)?.into_iter().collect())
    }

    /// Returns the nodes reachable from `start` in depth-first pre-order.
    ///
    /// Neighbors are followed in insertion order, so the sequence is the one a
    /// recursive depth-first search would produce.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
    pub fn dfs_order(&self, start: &N) -> Result<Vec<N>> {
        let start = self.start_id(start)?;
        let order: Vec<NodeId> = algorithms::dfs(self, start).collect();
        Ok(self.keys_of(&order))
    }

    /// Returns the nodes reachable from `start` in breadth-first order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
    pub fn bfs_order(&self, start: &N) -> Result<Vec<N>> {
        let start = self.start_id(start)?;
        let order: Vec<NodeId> = algorithms::bfs(self, start).collect();
        Ok(self.keys_of(&order))
    }

    /// Finds a path with the fewest edges from `start` to `end`.
    ///
    /// Among equally short paths the one discovered first wins, which follows neighbor
    /// insertion order. A node is always reachable from itself: `start == end` yields
    /// `[start]`.
    ///
    /// # Returns
    ///
    /// `Ok(Some(path))` including both endpoints, or `Ok(None)` if `end` cannot be
    /// reached (including when `end` is not in the graph).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsgraph::Graph;
    ///
    /// let graph = Graph::from_edges(true, [("A", "B"), ("B", "C"), ("A", "C")]);
    ///
    /// assert_eq!(graph.shortest_path(&"A", &"C")?, Some(vec!["A", "C"]));
    /// assert_eq!(graph.shortest_path(&"C", &"A")?, None);
    /// # Ok::<(), dsgraph::Error>(())
    /// ```
    pub fn shortest_path(&self, start: &N, end: &N) -> Result<Option<Vec<N>>> {
        let start = self.start_id(start)?;
        let Some(end) = self.node_id(end) else {
            return Ok(None);
        };

        Ok(algorithms::shortest_path(self, start, end).map(|path| self.keys_of(&path)))
    }

    /// Computes the edge-count distance from `start` to every node.
    ///
    /// Every node of the graph appears in the result: `Distance::Reachable(0)` for
    /// `start`, [`Distance::Unreachable`] for nodes without a path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
    pub fn unit_distances(&self, start: &N) -> Result<HashMap<N, Distance>> {
        let start = self.start_id(start)?;
        let distances = algorithms::unit_distances(self, start);

        let result: HashMap<N, Distance> = self
            .nodes()
            .cloned()
            .zip(distances.into_iter().map(Distance::from))
            .collect();

        log::debug!(
            "distances from {:?}: {} of {} nodes reachable",
            self.key(start),
            result.values().filter(|d| d.is_reachable()).count(),
            result.len()
        );
        Ok(result)
    }

    /// Computes the edge-count distance from `start` to every node.
    ///
    /// Despite the name this is **not** a weighted shortest-path search: edges have no
    /// weights, and a FIFO queue (not a priority queue) drives relaxation. It is an alias
    /// of [`Graph::unit_distances`] and returns the same breadth-first hop counts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsgraph::{Distance, Graph};
    ///
    /// let mut graph = Graph::from_edges(true, [("A", "B"), ("B", "C")]);
    /// graph.add_node("Z");
    ///
    /// let distances = graph.dijkstra(&"A")?;
    /// assert_eq!(distances[&"C"], Distance::Reachable(2));
    /// assert_eq!(distances[&"Z"], Distance::Unreachable);
    /// # Ok::<(), dsgraph::Error>(())
    /// ```
    pub fn dijkstra(&self, start: &N) -> Result<HashMap<N, Distance>> {
        self.unit_distances(start)
    }

    /// Orders every node so that, on an acyclic graph, each edge points forward.
    ///
    /// The graph is not checked for cycles: a cyclic graph still yields every node
    /// exactly once, in an order that is not topological. Use
    /// [`Graph::checked_topological_sort`] to reject cyclic input.
    #[must_use]
    pub fn topological_sort(&self) -> Vec<N> {
        self.keys_of(&algorithms::topological_sort(self))
    }

    /// Orders every node topologically, rejecting cyclic graphs.
    ///
    /// An undirected graph with at least one edge counts as cyclic, see
    /// [`Graph::is_cyclic`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the graph contains a cycle.
    pub fn checked_topological_sort(&self) -> Result<Vec<N>> {
        if let Some(cycle) = algorithms::find_cycle(self) {
            log::debug!("topological sort rejected, cycle {:?}", self.keys_of(&cycle));
            return Err(Error::CycleDetected);
        }
        Ok(self.topological_sort())
    }

    /// Returns `true` if a depth-first search finds a back-edge.
    ///
    /// Self-loops are cycles. On undirected graphs every edge is stored in both
    /// directions, so any edge makes the graph cyclic.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// Returns the first cycle found as a closed walk such as `[A, B, C, A]`.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<N>> {
        algorithms::find_cycle(self).map(|cycle| self.keys_of(&cycle))
    }

    /// Partitions the nodes into components.
    ///
    /// Each unvisited node, in insertion order, starts a new component made of every
    /// still-unvisited node reachable from it along edge direction, in discovery
    /// order. On undirected graphs these are the connected components.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        algorithms::connected_components(self)
            .iter()
            .map(|component| self.keys_of(component))
            .collect()
    }

    /// Returns the strongly connected components, in reverse topological order.
    #[must_use]
    pub fn strongly_connected_components(&self) -> Vec<Vec<N>> {
        algorithms::strongly_connected_components(self)
            .iter()
            .map(|scc| self.keys_of(scc))
            .collect()
    }

    /// Builds a breadth-first spanning tree rooted at the first inserted node.
    ///
    /// The name is historical: edges have no weights, so this is a BFS tree rather than
    /// a minimum spanning tree. Nodes not reachable from the root are left out. The
    /// tree has the same directedness as `self`, and an empty graph yields an empty
    /// tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsgraph::Graph;
    ///
    /// let graph = Graph::from_edges(false, [(1, 2), (2, 3), (3, 1)]);
    /// let tree = graph.minimum_spanning_tree();
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.edge_count(), 2);
    /// assert!(tree.has_edge(&1, &3));
    /// assert!(!tree.has_edge(&2, &3));
    /// ```
    #[must_use]
    pub fn minimum_spanning_tree(&self) -> Graph<N> {
        if self.is_empty() {
            return Graph::new(self.is_directed());
        }
        self.tree_from(NodeId::new(0))
    }

    /// Builds a breadth-first spanning tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `root` is not in the graph.
    pub fn spanning_tree_from(&self, root: &N) -> Result<Graph<N>> {
        let root = self.start_id(root)?;
        Ok(self.tree_from(root))
    }

    /// Exports the graph as a 0/1 adjacency matrix in node insertion order.
    #[must_use]
    pub fn to_adjacency_matrix(&self) -> AdjacencyMatrix<N> {
        AdjacencyMatrix::build(self, self.nodes().cloned().collect())
    }

    fn tree_from(&self, root: NodeId) -> Graph<N> {
        let edges = algorithms::bfs_tree(self, root);

        let mut tree = Graph::with_capacity(self.is_directed(), edges.len() + 1);
        if let Some(key) = self.key(root) {
            tree.add_node(key.clone());
        }
        for &(parent, child) in &edges {
            if let (Some(parent), Some(child)) = (self.key(parent), self.key(child)) {
                tree.add_edge(parent.clone(), child.clone());
            }
        }

        log::debug!(
            "spanning tree from {:?} covers {} of {} nodes",
            self.key(root),
            tree.len(),
            self.len()
        );
        tree
    }

    fn start_id(&self, node: &N) -> Result<NodeId> {
        self.node_id(node).ok_or_else(|| node_not_found!(node))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{Distance, Error, Graph};

    /// A -> B, A -> C, B -> C, C -> A, C -> D, D -> D
    fn create_sample_graph() -> Graph<&'static str> {
        Graph::from_edges(
            true,
            [
                ("A", "B"),
                ("A", "C"),
                ("B", "C"),
                ("C", "A"),
                ("C", "D"),
                ("D", "D"),
            ],
        )
    }

    fn create_diamond_graph() -> Graph<&'static str> {
        Graph::from_edges(true, [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
    }

    #[test]
    fn test_sample_scenario() {
        let graph = create_sample_graph();

        assert!(graph.is_cyclic());
        assert_eq!(graph.connected_components(), vec![vec!["A", "B", "C", "D"]]);
        assert_eq!(
            graph.shortest_path(&"A", &"D").unwrap(),
            Some(vec!["A", "C", "D"])
        );

        let distances = graph.dijkstra(&"A").unwrap();
        assert_eq!(distances.len(), 4);
        assert_eq!(distances[&"A"], Distance::Reachable(0));
        assert_eq!(distances[&"B"], Distance::Reachable(1));
        assert_eq!(distances[&"C"], Distance::Reachable(1));
        assert_eq!(distances[&"D"], Distance::Reachable(2));
    }

    #[test]
    fn test_search_sets_agree() {
        let graph = create_sample_graph();
        let dfs = graph.depth_first_search(&"B").unwrap();
        let bfs = graph.breadth_first_search(&"B").unwrap();

        assert_eq!(dfs, bfs);
        assert_eq!(dfs, HashSet::from(["A", "B", "C", "D"]));
    }

    #[test]
    fn test_orders() {
        let graph = create_diamond_graph();
        assert_eq!(graph.dfs_order(&"A").unwrap(), vec!["A", "B", "D", "C"]);
        assert_eq!(graph.bfs_order(&"A").unwrap(), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.dfs_order(&"D").unwrap(), vec!["D"]);
    }

    #[test]
    fn test_absent_start_is_error() {
        let graph = create_sample_graph();
        let expected = Err(Error::NodeNotFound("\"Z\"".to_string()));

        assert_eq!(graph.depth_first_search(&"Z"), expected);
        assert_eq!(graph.breadth_first_search(&"Z"), expected);
        assert!(matches!(graph.dfs_order(&"Z"), Err(Error::NodeNotFound(_))));
        assert!(matches!(graph.dijkstra(&"Z"), Err(Error::NodeNotFound(_))));
        assert!(matches!(
            graph.shortest_path(&"Z", &"A"),
            Err(Error::NodeNotFound(_))
        ));
        assert!(matches!(
            graph.spanning_tree_from(&"Z"),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_empty_graph_search_is_error() {
        let graph: Graph<&str> = Graph::directed();
        assert!(matches!(
            graph.breadth_first_search(&"A"),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_shortest_path_absent_end_is_none() {
        let graph = create_sample_graph();
        assert_eq!(graph.shortest_path(&"A", &"Z").unwrap(), None);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = create_sample_graph();
        assert_eq!(graph.shortest_path(&"D", &"A").unwrap(), None);
        assert_eq!(graph.shortest_path(&"D", &"D").unwrap(), Some(vec!["D"]));
    }

    #[test]
    fn test_dijkstra_marks_unreachable() {
        let graph = create_sample_graph();
        let distances = graph.unit_distances(&"D").unwrap();

        assert_eq!(distances[&"D"], Distance::Reachable(0));
        assert_eq!(distances[&"A"], Distance::Unreachable);
        assert_eq!(distances, graph.dijkstra(&"D").unwrap());
    }

    #[test]
    fn test_topological_sort_dag() {
        let graph = create_diamond_graph();
        assert_eq!(graph.topological_sort(), vec!["A", "C", "B", "D"]);
        assert_eq!(
            graph.checked_topological_sort().unwrap(),
            vec!["A", "C", "B", "D"]
        );
    }

    #[test]
    fn test_checked_topological_sort_rejects_cycle() {
        let graph = create_sample_graph();
        assert_eq!(graph.checked_topological_sort(), Err(Error::CycleDetected));
        // The unchecked variant still lists every node once
        assert_eq!(graph.topological_sort().len(), 4);
    }

    #[test]
    fn test_cycles() {
        let cyclic = Graph::from_edges(true, [("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(cyclic.is_cyclic());
        assert_eq!(cyclic.find_cycle(), Some(vec!["A", "B", "C", "A"]));

        let dag = Graph::from_edges(true, [("A", "B"), ("B", "C")]);
        assert!(!dag.is_cyclic());
        assert_eq!(dag.find_cycle(), None);
    }

    #[test]
    fn test_components_undirected() {
        let mut graph = Graph::from_edges(false, [(1, 2), (3, 4), (2, 5)]);
        graph.add_node(6);

        assert_eq!(
            graph.connected_components(),
            vec![vec![1, 2, 5], vec![3, 4], vec![6]]
        );
    }

    #[test]
    fn test_strongly_connected_components() {
        let graph = create_sample_graph();
        let sccs = graph.strongly_connected_components();

        assert_eq!(sccs.len(), 2);
        assert_eq!(sccs[0], vec!["D"]);
        let rest: HashSet<&str> = sccs[1].iter().copied().collect();
        assert_eq!(rest, HashSet::from(["A", "B", "C"]));
    }

    #[test]
    fn test_minimum_spanning_tree_sample() {
        let graph = create_sample_graph();
        let tree = graph.minimum_spanning_tree();

        assert!(tree.is_directed());
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert!(tree.has_edge(&"A", &"B"));
        assert!(tree.has_edge(&"A", &"C"));
        assert!(tree.has_edge(&"C", &"D"));
        assert!(!tree.is_cyclic());
    }

    #[test]
    fn test_minimum_spanning_tree_omits_other_components() {
        let mut graph = Graph::from_edges(false, [('a', 'b'), ('c', 'd')]);
        graph.add_node('e');

        let tree = graph.minimum_spanning_tree();
        assert!(!tree.is_directed());
        assert_eq!(tree.nodes().copied().collect::<Vec<_>>(), vec!['a', 'b']);
        assert!(tree.has_edge(&'b', &'a'));
    }

    #[test]
    fn test_minimum_spanning_tree_single_node() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_node("A");

        let tree = graph.minimum_spanning_tree();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.edge_count(), 0);
    }

    #[test]
    fn test_minimum_spanning_tree_empty() {
        let graph: Graph<u8> = Graph::undirected();
        let tree = graph.minimum_spanning_tree();
        assert!(tree.is_empty());
        assert!(!tree.is_directed());
    }

    #[test]
    fn test_spanning_tree_from_root() {
        let graph = create_sample_graph();
        let tree = graph.spanning_tree_from(&"C").unwrap();

        assert_eq!(tree.nodes().copied().collect::<Vec<_>>(), vec!["C", "A", "D", "B"]);
        assert!(tree.has_edge(&"C", &"A"));
        assert!(tree.has_edge(&"C", &"D"));
        assert!(tree.has_edge(&"A", &"B"));
    }

    #[test]
    fn test_matrix_matches_has_edge() {
        let graph = create_sample_graph();
        let matrix = graph.to_adjacency_matrix();

        for (i, u) in matrix.nodes().iter().enumerate() {
            for (j, v) in matrix.nodes().iter().enumerate() {
                assert_eq!(matrix.get(i, j) == Some(1), graph.has_edge(u, v));
            }
        }
    }
}
