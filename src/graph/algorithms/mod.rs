//! Graph algorithms over [`NodeId`](crate::graph::NodeId)s.
//!
//! Every algorithm here is generic over the [`Successors`](crate::graph::Successors)
//! trait and works on dense node ids. The [`Graph`](crate::graph::Graph) methods of the
//! same names wrap them, check that start nodes exist and translate ids back to keys.
//! Use this module directly when ids are enough or when running several algorithms
//! over one graph without converting in between.
//!
//! All depth-first routines are iterative, so deep graphs do not exhaust the call
//! stack. Neighbors are always explored in the order their edges were inserted, which
//! makes every result deterministic.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal (pre-order)
//! - [`bfs`] - Breadth-first search traversal
//! - [`postorder`] - Postorder traversal
//! - [`reverse_postorder`] - Reverse postorder traversal
//!
//! ## Paths
//!
//! - [`shortest_path`] - Fewest-edge path between two nodes
//! - [`unit_distances`] - Edge-count distance from one node to all others
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Check if a graph contains any cycles
//! - [`find_cycle`] - Find a cycle if one exists
//!
//! ## Ordering and Structure
//!
//! - [`topological_sort`] - Reverse finishing order of a full depth-first search
//! - [`connected_components`] - Partition by depth-first reachability
//! - [`strongly_connected_components`] - Tarjan's SCC algorithm
//! - [`bfs_tree`] - Tree edges of a breadth-first search
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | Reachability, general traversal |
//! | Shortest path / distances | O(V + E) | Hop counts on unweighted graphs |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | Components / SCC | O(V + E) | Grouping, recursion detection |
//!
//! # Examples
//!
//! ```rust
//! use dsgraph::{graph::{algorithms, NodeId}, Graph};
//!
//! let graph = Graph::from_edges(true, [("A", "B"), ("B", "C")]);
//! let a = graph.node_id(&"A").unwrap();
//!
//! let order: Vec<NodeId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
//! assert!(!algorithms::has_cycle(&graph));
//! ```

mod components;
mod cycles;
mod paths;
mod spanning;
mod topological;
pub(crate) mod traversal;

pub use components::{connected_components, strongly_connected_components};
pub use cycles::{find_cycle, has_cycle};
pub use paths::{shortest_path, unit_distances};
pub use spanning::bfs_tree;
pub use topological::topological_sort;
pub use traversal::{bfs, dfs, postorder, reverse_postorder, BfsIterator, DfsIterator};
