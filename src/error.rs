use thiserror::Error;

macro_rules! node_not_found {
    ($node:expr) => {
        crate::Error::NodeNotFound(format!("{:?}", $node))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most graph operations are total: removing an absent node or edge is a no-op and
/// [`Graph::neighbors`](crate::Graph::neighbors) on an absent node yields an empty slice.
/// Errors are reserved for requests that cannot be answered from the current graph state.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::NodeNotFound`] - A traversal or pathfinding start node is not a graph member
///
/// ## Ordering Errors
/// - [`Error::CycleDetected`] - A checked topological ordering was requested on a cyclic graph
///
/// # Examples
///
/// ```rust
/// use dsgraph::{Error, Graph};
///
/// let mut graph = Graph::directed();
/// graph.add_edge("A", "B");
///
/// match graph.depth_first_search(&"Z") {
///     Ok(reachable) => println!("{} nodes reachable", reachable.len()),
///     Err(Error::NodeNotFound(node)) => eprintln!("no such node: {node}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested node is not a member of the graph.
    ///
    /// Returned by traversal, pathfinding and spanning-tree operations whose start
    /// node has no adjacency entry. The associated string is the `Debug` rendering
    /// of the missing identifier.
    #[error("Node not found in graph - {0}")]
    NodeNotFound(String),

    /// The graph contains a cycle, so no topological ordering exists.
    ///
    /// Only the checked ordering reports this; the plain
    /// [`Graph::topological_sort`](crate::Graph::topological_sort) returns an
    /// (invalid) order without inspecting the graph for cycles.
    #[error("Graph contains a cycle, no topological order exists")]
    CycleDetected,
}
