//! Dense adjacency-matrix graph with matrix-algebra operators.
//!
//! The [`Graph`] type owns a square matrix of `i32` edge weights and exposes
//! structural queries (vertex count, adjacency rows, edge list), element-wise
//! and matrix arithmetic, dimension-checked relational operators, and two text
//! formats.
//!
//! # Example
//!
//! ```rust
//! use densegraph_core::Graph;
//!
//! let a: Graph = "0 1\n1 0".parse()?;
//! let b = Graph::try_from(vec![vec![1, 1], vec![1, 1]])?;
//!
//! let sum = a.try_add(&b)?;
//! assert_eq!(sum.to_display_string(), "[1, 2]\n[2, 1]");
//! # Ok::<(), densegraph_core::Error>(())
//! ```

mod adjacency;
mod algebra;
mod format;


pub use adjacency::Graph;
