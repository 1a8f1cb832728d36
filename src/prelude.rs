//! # dsgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! dsgraph library. Import this module to get quick access to the graph container and
//! the types its algorithms return.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dsgraph operations
pub use crate::Error;

/// The result type used throughout dsgraph
pub use crate::Result;

// ================================================================================================
// Graph Container and Algorithm Results
// ================================================================================================

/// Adjacency-list graph over hashable identifiers
pub use crate::graph::Graph;

/// Hop count returned by the unit-weight distance computation
pub use crate::graph::Distance;

/// Adjacency matrix export
pub use crate::graph::AdjacencyMatrix;

// ================================================================================================
// Index-Level Building Blocks
// ================================================================================================

/// Dense internal node index
pub use crate::graph::NodeId;

/// Read-only successor view used by the algorithms
pub use crate::graph::Successors;
