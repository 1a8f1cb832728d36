//! Dense adjacency-matrix export.

use std::fmt;

use crate::graph::{NodeId, Successors};

/// A square 0/1 adjacency matrix paired with the node ordering of its rows.
///
/// Row and column `i` both correspond to `nodes()[i]`, which is the node insertion
/// order of the graph it was built from. Cell `[i][j]` is `1` when at least one edge
/// `nodes()[i] → nodes()[j]` exists. Parallel edges collapse to a single `1`, while
/// self-loops and asymmetric (directed) edges are kept.
///
/// # Examples
///
/// ```rust
/// use dsgraph::Graph;
///
/// let graph = Graph::from_edges(true, [("A", "B"), ("B", "B")]);
/// let matrix = graph.to_adjacency_matrix();
///
/// assert_eq!(matrix.nodes(), &["A", "B"]);
/// assert_eq!(matrix.rows(), &[vec![0, 1], vec![0, 1]]);
/// assert_eq!(matrix.get(1, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<N> {
    nodes: Vec<N>,
    rows: Vec<Vec<u8>>,
}

impl<N> AdjacencyMatrix<N> {
    /// Builds the matrix for `graph`, labelling rows with `nodes`.
    ///
    /// `nodes` must list the identifiers in `NodeId` order.
    pub(crate) fn build<G: Successors>(graph: &G, nodes: Vec<N>) -> Self {
        let size = graph.node_count();
        let mut rows = vec![vec![0u8; size]; size];

        for (i, row) in rows.iter_mut().enumerate() {
            for succ in graph.successors(NodeId::new(i)) {
                row[succ.index()] = 1;
            }
        }

        Self { nodes, rows }
    }

    /// Returns the node labelling each row and column.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the matrix rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Returns cell `[row][col]`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Returns the number of rows, which is also the number of columns.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Consumes the matrix and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}

impl<N> fmt::Display for AdjacencyMatrix<N> {
    /// Renders one line per row, cells separated by a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
