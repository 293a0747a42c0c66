//! Error types for densegraph-core.

use thiserror::Error;

/// Graph operation error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Input matrix is not square.
    #[error("Invalid shape: matrix is not square ({rows} rows, offending row has {cols} columns)")]
    InvalidShape {
        /// Number of rows in the rejected matrix.
        rows: usize,
        /// Length of the first row that broke the square invariant.
        cols: usize,
    },

    /// Vertex index outside the graph.
    #[error("Index out of range: {index} (graph has {len} vertices)")]
    IndexOutOfRange {
        /// The requested vertex index.
        index: usize,
        /// Number of vertices in the graph.
        len: usize,
    },

    /// Binary operation on graphs of different sizes.
    #[error("Dimension mismatch: {left} vertices vs {right} vertices")]
    DimensionMismatch {
        /// Vertex count of the left operand.
        left: usize,
        /// Vertex count of the right operand.
        right: usize,
    },

    /// Addition or matrix multiplication with a zero-vertex operand.
    #[error("Empty operand: operation requires non-empty graphs")]
    EmptyOperand,

    /// Cell sum exceeded the representable `i32` range during addition.
    #[error("Integer overflow in addition at cell ({row}, {col})")]
    Overflow {
        /// Row of the overflowing cell.
        row: usize,
        /// Column of the overflowing cell.
        col: usize,
    },

    /// Scalar division by zero.
    #[error("Division by zero")]
    DivideByZero,

    /// Malformed integer token in text input.
    #[error("Invalid weight token: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// IO error while reading a graph from a stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
