//! # densegraph Core
//!
//! Dense adjacency-matrix graph engine with a full matrix-algebra operator
//! suite.
//!
//! A [`Graph`] is a square matrix of signed integer edge weights treated as an
//! algebraic object: element-wise addition and subtraction, matrix and
//! Hadamard multiplication, scalar scaling, increment/decrement, and
//! cell-wise relational operators, plus two text formats for reading and
//! writing matrices.
//!
//! ## Quick Start
//!
//! ```rust
//! use densegraph_core::Graph;
//!
//! fn main() -> densegraph_core::Result<()> {
//!     let mut g = Graph::new();
//!     g.load(vec![
//!         vec![0, 1, 0],
//!         vec![1, 0, 1],
//!         vec![0, 1, 0],
//!     ])?;
//!
//!     let doubled = g.scale(2);
//!     assert_eq!(doubled.adjacency_row(0)?, &[0, 2, 0]);
//!     assert_eq!(g.edges(), vec![(0, 1, 1), (1, 2, 1)]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::Graph;
