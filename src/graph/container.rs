//! Graph storage, mutation and lookup operators.

use std::{
    collections::HashMap,
    fmt::{self, Debug},
    hash::Hash,
};

use crate::graph::{NodeId, Successors};

/// A mutable adjacency-list graph over identifiers of type `N`.
///
/// Each node owns an ordered sequence of neighbors. The directedness flag is fixed at
/// construction: an undirected graph mirrors every edge insertion and removal, so for
/// every stored edge `(u, v)` the edge `(v, u)` is stored as well.
///
/// # Invariants
///
/// - Every neighbor is itself a node of the graph. [`Graph::add_edge`] creates missing
///   endpoints and [`Graph::remove_node`] strips every reference to the removed node.
/// - Parallel edges are stored once per [`Graph::add_edge`] call and self-loops are
///   allowed. Nothing is deduplicated.
/// - Nodes and neighbor sequences keep their insertion order.
///
/// # Type Parameters
///
/// * `N` - The node identifier, any `Hash + Eq + Clone + Debug` value such as `&str`,
///   `String` or an integer. `Debug` is used to render identifiers in errors and in the
///   [`Display`](fmt::Display) dump.
///
/// # Examples
///
/// ```rust
/// use dsgraph::Graph;
///
/// let mut graph = Graph::undirected();
/// graph.add_edge("A", "B");
///
/// assert!(graph.has_edge(&"A", &"B"));
/// assert!(graph.has_edge(&"B", &"A"));
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edge_count(), 1);
///
/// graph.remove_edge(&"B", &"A");
/// assert!(!graph.has_edge(&"A", &"B"));
/// assert_eq!(graph.len(), 2);
/// ```
///
/// # Thread Safety
///
/// `Graph<N>` is `Send` and `Sync` when `N` is. It has no interior mutability: mutation
/// requires `&mut self`, so sharing a graph across threads needs external
/// synchronization such as a `RwLock`.
#[derive(Clone)]
pub struct Graph<N> {
    /// Whether edges are one-way
    directed: bool,
    /// Identifier of each node, indexed by `NodeId`
    keys: Vec<N>,
    /// Map from identifier to `NodeId`
    index: HashMap<N, NodeId>,
    /// Ordered neighbor sequence of each node, indexed by `NodeId`
    adjacency: Vec<Vec<NodeId>>,
}

impl<N> Graph<N>
where
    N: Hash + Eq + Clone + Debug,
{
    /// Creates an empty graph with the given directedness.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph with room for `node_capacity` nodes.
    #[must_use]
    pub fn with_capacity(directed: bool, node_capacity: usize) -> Self {
        Graph {
            directed,
            keys: Vec::with_capacity(node_capacity),
            index: HashMap::with_capacity(node_capacity),
            adjacency: Vec::with_capacity(node_capacity),
        }
    }

    /// Builds a graph by adding every `(from, to)` pair in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsgraph::Graph;
    ///
    /// let graph = Graph::from_edges(true, [(1, 2), (2, 3)]);
    /// assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new(directed);
        graph.extend(edges);
        graph
    }

    /// Returns `true` if edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of edges.
    ///
    /// In a directed graph this is the number of stored neighbor entries. In an
    /// undirected graph each mirrored pair counts once, as does each self-loop.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.directed {
            return entries;
        }

        let self_loops = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(i, neighbors)| neighbors.iter().filter(|n| n.index() == i).count())
            .sum::<usize>();
        (entries - self_loops) / 2 + self_loops
    }

    /// Adds `node` with no neighbors if it is not already present.
    ///
    /// Returns `true` if the node was inserted, `false` if it already existed.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.intern(node);
        true
    }

    /// Adds an edge from `from` to `to`, creating either endpoint if missing.
    ///
    /// In an undirected graph the reverse entry is appended as well, except for a
    /// self-loop which is stored once. Parallel edges and self-loops are accepted.
    pub fn add_edge(&mut self, from: N, to: N) {
        let from_id = self.intern(from);
        let to_id = self.intern(to);

        self.adjacency[from_id.index()].push(to_id);
        if !self.directed && from_id != to_id {
            self.adjacency[to_id.index()].push(from_id);
        }

        log::trace!(
            "added edge {:?} -> {:?}",
            self.keys[from_id.index()],
            self.keys[to_id.index()]
        );
    }

    /// Removes `node` and every edge that references it.
    ///
    /// Nodes inserted after `node` keep their relative order; their [`NodeId`]s shift
    /// down by one. Returns `false` and does nothing if `node` is absent.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let Some(removed) = self.index.remove(node) else {
            return false;
        };

        self.keys.remove(removed.index());
        self.adjacency.remove(removed.index());

        for neighbors in &mut self.adjacency {
            neighbors.retain(|&n| n != removed);
            for n in neighbors.iter_mut() {
                if n.index() > removed.index() {
                    *n = NodeId::new(n.index() - 1);
                }
            }
        }
        for id in self.index.values_mut() {
            if id.index() > removed.index() {
                *id = NodeId::new(id.index() - 1);
            }
        }

        log::trace!("removed node {node:?}");
        true
    }

    /// Removes one occurrence of the edge from `from` to `to`.
    ///
    /// In an undirected graph one occurrence of the reverse entry is removed as well.
    /// The endpoints stay in the graph. Returns `false` if no entry was removed.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let (Some(from_id), Some(to_id)) = (self.node_id(from), self.node_id(to)) else {
            return false;
        };

        let mut removed = self.remove_entry(from_id, to_id);
        if !self.directed && from_id != to_id {
            removed |= self.remove_entry(to_id, from_id);
        }

        if removed {
            log::trace!("removed edge {from:?} -> {to:?}");
        }
        removed
    }

    /// Removes every node and edge, keeping the directedness.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.index.clear();
        self.adjacency.clear();
    }

    /// Returns `true` if `node` is in the graph.
    #[must_use]
    pub fn has_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns `true` if `node` is in the graph.
    ///
    /// Membership test, identical to [`Graph::has_node`].
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.has_node(node)
    }

    /// Returns `true` if an edge from `from` to `to` is stored.
    #[must_use]
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        match (self.node_id(from), self.node_id(to)) {
            (Some(from_id), Some(to_id)) => self.adjacency[from_id.index()].contains(&to_id),
            _ => false,
        }
    }

    /// Returns `true` if `to` is a neighbor of `from`.
    ///
    /// Same answer as [`Graph::has_edge`].
    #[must_use]
    pub fn is_adjacent(&self, from: &N, to: &N) -> bool {
        self.has_edge(from, to)
    }

    /// Returns the neighbors of `node` in edge insertion order.
    ///
    /// Parallel edges yield the neighbor once per edge. An absent node has no neighbors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsgraph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// graph.add_edge("A", "C");
    /// graph.add_edge("A", "B");
    ///
    /// assert_eq!(graph.neighbors(&"A").copied().collect::<Vec<_>>(), vec!["C", "B"]);
    /// assert_eq!(graph.neighbors(&"Z").count(), 0);
    /// ```
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> + '_ {
        let ids: &[NodeId] = self
            .node_id(node)
            .map(|id| self.adjacency[id.index()].as_slice())
            .unwrap_or_default();
        ids.iter().map(move |id| &self.keys[id.index()])
    }

    /// Returns the length of the neighbor sequence of `node`, 0 if absent.
    #[must_use]
    pub fn degree(&self, node: &N) -> usize {
        self.node_id(node)
            .map_or(0, |id| self.adjacency[id.index()].len())
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.keys.iter()
    }

    /// Returns every stored `(from, to)` entry, grouped by source in insertion order.
    ///
    /// An undirected edge appears once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, neighbors)| {
            neighbors
                .iter()
                .map(move |n| (&self.keys[i], &self.keys[n.index()]))
        })
    }

    /// Returns the [`NodeId`] currently assigned to `node`.
    #[must_use]
    pub fn node_id(&self, node: &N) -> Option<NodeId> {
        self.index.get(node).copied()
    }

    /// Returns the identifier stored at `id`.
    #[must_use]
    pub fn key(&self, id: NodeId) -> Option<&N> {
        self.keys.get(id.index())
    }

    /// Maps a sequence of `NodeId`s back to identifiers.
    pub(crate) fn keys_of(&self, ids: &[NodeId]) -> Vec<N> {
        ids.iter().map(|id| self.keys[id.index()].clone()).collect()
    }

    /// Returns the `NodeId` of `node`, inserting it first if absent.
    fn intern(&mut self, node: N) -> NodeId {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }

        let id = NodeId::new(self.keys.len());
        self.keys.push(node.clone());
        self.index.insert(node, id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Removes the first `to` entry from the neighbor sequence of `from`.
    fn remove_entry(&mut self, from: NodeId, to: NodeId) -> bool {
        let neighbors = &mut self.adjacency[from.index()];
        match neighbors.iter().position(|&n| n == to) {
            Some(pos) => {
                neighbors.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl<N> Successors for Graph<N> {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn successors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl<N> Default for Graph<N>
where
    N: Hash + Eq + Clone + Debug,
{
    /// Creates an empty undirected graph.
    fn default() -> Self {
        Self::undirected()
    }
}

impl<N> Extend<(N, N)> for Graph<N>
where
    N: Hash + Eq + Clone + Debug,
{
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl<N: PartialEq> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed
            && self.keys == other.keys
            && self.adjacency == other.adjacency
    }
}

impl<N: Eq> Eq for Graph<N> {}

impl<N: Debug> Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.directed)
            .field("nodes", &self.keys.len())
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

impl<N: Debug> fmt::Display for Graph<N> {
    /// Renders one line per node in insertion order, `node → [neighbors]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, neighbors)) in self.keys.iter().zip(&self.adjacency).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key:?} → [")?;
            for (j, n) in neighbors.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", self.keys[n.index()])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
