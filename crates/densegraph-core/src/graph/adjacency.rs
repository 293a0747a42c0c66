//! The dense adjacency-matrix graph type.
//!
//! A [`Graph`] owns a square matrix of signed edge weights; row `i` holds the
//! outgoing weights of vertex `i` and a weight of 0 means "no edge". The matrix
//! is validated for squareness at every boundary (construction, [`Graph::load`],
//! text parsing, serde deserialization), so a constructed value is always square
//! or empty.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A weighted graph backed by a dense square adjacency matrix.
///
/// The graph is a plain value: `Clone` is a deep copy, `Default` is the empty
/// graph. Structural equality (`==`) compares matrices of any size; the
/// dimension-checked relational operators live in the `try_*` family on this
/// type.
///
/// # Example
///
/// ```rust
/// use densegraph_core::Graph;
///
/// let g = Graph::try_from(vec![
///     vec![0, 1, 0],
///     vec![1, 0, 1],
///     vec![0, 1, 0],
/// ])?;
///
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// # Ok::<(), densegraph_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct Graph {
    /// Square adjacency matrix; row i = outgoing weights from vertex i.
    matrix: Vec<Vec<i32>>,
}

impl Graph {
    /// Creates an empty graph with zero vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the graph's contents with the given adjacency matrix.
    ///
    /// The matrix is validated first and the receiver is left untouched on
    /// failure. A 0×0 matrix is square and yields the empty graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if any row's length differs from the
    /// number of rows.
    pub fn load(&mut self, matrix: Vec<Vec<i32>>) -> Result<()> {
        check_square(&matrix)?;
        self.matrix = matrix;
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Returns the full adjacency matrix.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<i32>] {
        &self.matrix
    }

    /// Returns the outgoing weights of the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= vertex_count()`; on the
    /// empty graph every index is out of range.
    pub fn adjacency_row(&self, index: usize) -> Result<&[i32]> {
        self.matrix
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.matrix.len(),
            })
    }

    /// Returns the edge list as `(from, to, weight)` triples.
    ///
    /// The matrix is scanned in row-major order and each unordered vertex pair
    /// contributes at most one edge: a cell is emitted unless its reverse cell
    /// was already emitted, so for an asymmetric pair the first-seen direction
    /// wins. Self-loops emit once.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize, i32)> {
        let mut list = Vec::new();
        for (i, row) in self.matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                // The reverse cell (j, i) precedes (i, j) in scan order only
                // when j < i; it was emitted iff it is non-zero.
                if j >= i || self.matrix[j][i] == 0 {
                    list.push((i, j, weight));
                }
            }
        }
        list
    }

    /// Returns the number of edges, counting each unordered pair once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Internal cell access for the algebra operations, which only index
    /// within `vertex_count()` after dimension checks.
    pub(crate) fn cell(&self, row: usize, col: usize) -> i32 {
        self.matrix[row][col]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut i32 {
        &mut self.matrix[row][col]
    }

    /// Builds an all-zero square matrix of the given size.
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            matrix: vec![vec![0; size]; size],
        }
    }
}

impl TryFrom<Vec<Vec<i32>>> for Graph {
    type Error = Error;

    /// Validating constructor from a raw adjacency matrix.
    fn try_from(matrix: Vec<Vec<i32>>) -> Result<Self> {
        check_square(&matrix)?;
        Ok(Self { matrix })
    }
}

impl From<Graph> for Vec<Vec<i32>> {
    fn from(graph: Graph) -> Self {
        graph.matrix
    }
}

/// Checks that every row's length equals the number of rows.
fn check_square(matrix: &[Vec<i32>]) -> Result<()> {
    let rows = matrix.len();
    for row in matrix {
        if row.len() != rows {
            return Err(Error::InvalidShape {
                rows,
                cols: row.len(),
            });
        }
    }
    Ok(())
}
