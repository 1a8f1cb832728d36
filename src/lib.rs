// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dsgraph
//!
//! An adjacency-list graph over arbitrary hashable identifiers, together with the
//! classic algorithms that run over it: depth-first and breadth-first search,
//! unit-weight shortest paths, topological ordering, cycle detection, connected
//! components, BFS spanning trees and adjacency-matrix export.
//!
//! ## Quick Start
//!
//! ```rust
//! use dsgraph::prelude::*;
//!
//! let mut graph = Graph::directed();
//! graph.add_edge("A", "B");
//! graph.add_edge("A", "C");
//! graph.add_edge("B", "C");
//! graph.add_edge("C", "A");
//! graph.add_edge("C", "D");
//! graph.add_edge("D", "D");
//!
//! assert!(graph.is_cyclic());
//! assert_eq!(graph.shortest_path(&"A", &"D")?, Some(vec!["A", "C", "D"]));
//! assert_eq!(graph.dijkstra(&"A")?[&"D"], Distance::Reachable(2));
//! # Ok::<(), dsgraph::Error>(())
//! ```
//!
//! ## Data Model
//!
//! A [`Graph`] maps each node to an ordered sequence of neighbors. Insertion order is
//! preserved everywhere (node enumeration, neighbor sequences) so every algorithm's
//! output is deterministic. The directedness flag is fixed at construction; an
//! undirected graph mirrors every edge insertion and removal.
//!
//! Parallel edges and self-loops are stored as-is, the adjacency list does not
//! deduplicate.
//!
//! ## Architecture
//!
//! - [`Graph`] - Storage, mutation, queries and the algorithm entry points
//! - [`graph::algorithms`] - The algorithms themselves, written against the
//!   [`graph::Successors`] trait over dense [`graph::NodeId`] indices
//! - [`Distance`] - Hop counts returned by the unit-weight distance computation
//! - [`AdjacencyMatrix`] - 0/1 matrix export
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Operations that need an existing start node return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use dsgraph::{Error, Graph};
//!
//! let graph: Graph<&str> = Graph::directed();
//! assert!(matches!(graph.breadth_first_search(&"A"), Err(Error::NodeNotFound(_))));
//! ```
//!
//! Removing absent nodes or edges is a no-op, and an unreachable target of
//! [`Graph::shortest_path`] is reported as `Ok(None)`.
//!
//! ## Logging
//!
//! The crate emits diagnostics through the [`log`] facade: `trace` for individual
//! mutations, `debug` for algorithm summaries. No logger is installed by the library.

#[macro_use]
pub(crate) mod error;

/// Adjacency-list graph and its algorithms.
///
/// # Key Types
///
/// - [`graph::Graph`] - The graph container
/// - [`graph::NodeId`] - Dense internal node index
/// - [`graph::Successors`] - Read-only view consumed by the algorithms
/// - [`graph::Distance`] - Finite or unreachable hop count
/// - [`graph::AdjacencyMatrix`] - 0/1 matrix export
pub mod graph;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use dsgraph::prelude::*;
///
/// let mut graph = Graph::undirected();
/// graph.add_edge(1, 2);
/// assert_eq!(graph.connected_components(), vec![vec![1, 2]]);
/// ```
pub mod prelude;

pub use error::Error;
pub use graph::{AdjacencyMatrix, Distance, Graph};

/// The generic Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
