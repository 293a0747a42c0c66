//! Arithmetic and relational operations on [`Graph`].
//!
//! Every binary operation requires equal vertex counts and fails with
//! [`Error::DimensionMismatch`] otherwise; addition and matrix multiplication
//! additionally reject zero-vertex operands with [`Error::EmptyOperand`].
//! Operations either fully succeed or leave the receiver untouched.
//!
//! Two behaviors are intended and must not be "fixed" casually:
//!
//! - [`Graph::try_add`] checks each cell sum for `i32` overflow;
//!   [`Graph::try_add_assign`] does not (it wraps). See the method docs.
//! - [`Graph::try_matmul`] is a standard matrix product while the compound
//!   multiply [`Graph::try_hadamard_assign`] is element-wise. The two are
//!   different operations, not two spellings of one.
//!
//! All unchecked arithmetic uses wrapping ops so the no-check paths have
//! defined two's-complement behavior on the full `i32` range.

use std::ops::Neg;

use crate::error::{Error, Result};

use super::adjacency::Graph;

impl Graph {
    // ── Element-wise addition and subtraction ──────────────────────────

    /// Returns the element-wise sum of two graphs.
    ///
    /// Each cell sum is checked for `i32` overflow. The in-place variant
    /// [`Graph::try_add_assign`] performs no such check; the asymmetry is
    /// deliberate and covered by tests.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOperand`] if either operand has zero vertices,
    /// [`Error::DimensionMismatch`] if the vertex counts differ, and
    /// [`Error::Overflow`] on the first cell whose sum leaves the `i32` range.
    pub fn try_add(&self, other: &Graph) -> Result<Graph> {
        self.check_non_empty_pair(other)?;
        self.check_same_size(other)?;

        let n = self.vertex_count();
        let mut result = Graph::zeroed(n);
        for i in 0..n {
            for j in 0..n {
                *result.cell_mut(i, j) = self
                    .cell(i, j)
                    .checked_add(other.cell(i, j))
                    .ok_or(Error::Overflow { row: i, col: j })?;
            }
        }
        Ok(result)
    }

    /// Adds `other` into `self` element-wise, without overflow checking.
    ///
    /// Unlike [`Graph::try_add`], cell sums wrap on overflow instead of
    /// failing. Keep the two variants in sync only intentionally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_add_assign(&mut self, other: &Graph) -> Result<()> {
        self.check_same_size(other)?;
        self.zip_cells_in_place(other, i32::wrapping_add);
        Ok(())
    }

    /// Returns the element-wise difference of two graphs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_sub(&self, other: &Graph) -> Result<Graph> {
        self.check_same_size(other)?;
        let mut result = self.clone();
        result.zip_cells_in_place(other, i32::wrapping_sub);
        Ok(result)
    }

    /// Subtracts `other` from `self` element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_sub_assign(&mut self, other: &Graph) -> Result<()> {
        self.check_same_size(other)?;
        self.zip_cells_in_place(other, i32::wrapping_sub);
        Ok(())
    }

    // ── Graph × graph multiplication ───────────────────────────────────

    /// Returns the standard matrix product of two graphs:
    /// `result[i][j] = Σ_k self[i][k] · other[k][j]`.
    ///
    /// This is NOT the element-wise product — that is
    /// [`Graph::try_hadamard_assign`], the in-place compound multiply. The
    /// split is intended; for non-trivial operands the two results differ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOperand`] if either operand has zero vertices and
    /// [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_matmul(&self, other: &Graph) -> Result<Graph> {
        self.check_non_empty_pair(other)?;
        self.check_same_size(other)?;

        let n = self.vertex_count();
        let mut result = Graph::zeroed(n);
        for i in 0..n {
            for j in 0..n {
                let mut acc = 0i32;
                for k in 0..n {
                    acc = acc.wrapping_add(self.cell(i, k).wrapping_mul(other.cell(k, j)));
                }
                *result.cell_mut(i, j) = acc;
            }
        }
        Ok(result)
    }

    /// Multiplies `self` by `other` element-wise (Hadamard product) in place.
    ///
    /// This is NOT a matrix product — the binary multiply
    /// [`Graph::try_matmul`] is. The compound multiply has always been
    /// element-wise and callers rely on it; do not unify the two.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_hadamard_assign(&mut self, other: &Graph) -> Result<()> {
        self.check_same_size(other)?;
        self.zip_cells_in_place(other, i32::wrapping_mul);
        Ok(())
    }

    // ── Scalar scaling ─────────────────────────────────────────────────

    /// Returns a copy with every cell multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: i32) -> Graph {
        let mut result = self.clone();
        result.scale_assign(factor);
        result
    }

    /// Multiplies every cell by `factor` in place.
    pub fn scale_assign(&mut self, factor: i32) {
        self.for_each_cell_mut(|cell| *cell = cell.wrapping_mul(factor));
    }

    /// Returns a copy with every cell divided by `divisor`, truncating toward
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is 0.
    pub fn try_div_scalar(&self, divisor: i32) -> Result<Graph> {
        let mut result = self.clone();
        result.try_div_assign_scalar(divisor)?;
        Ok(result)
    }

    /// Divides every cell by `divisor` in place, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is 0.
    pub fn try_div_assign_scalar(&mut self, divisor: i32) -> Result<()> {
        if divisor == 0 {
            return Err(Error::DivideByZero);
        }
        self.for_each_cell_mut(|cell| *cell = cell.wrapping_div(divisor));
        Ok(())
    }

    // ── Increment / decrement ──────────────────────────────────────────

    /// Adds 1 to every cell and returns the mutated graph.
    pub fn increment(&mut self) -> &mut Self {
        self.for_each_cell_mut(|cell| *cell = cell.wrapping_add(1));
        self
    }

    /// Subtracts 1 from every cell and returns the mutated graph.
    pub fn decrement(&mut self) -> &mut Self {
        self.for_each_cell_mut(|cell| *cell = cell.wrapping_sub(1));
        self
    }

    /// Adds 1 to every cell and returns the graph as it was before.
    pub fn fetch_increment(&mut self) -> Graph {
        let snapshot = self.clone();
        self.increment();
        snapshot
    }

    /// Subtracts 1 from every cell and returns the graph as it was before.
    pub fn fetch_decrement(&mut self) -> Graph {
        let snapshot = self.clone();
        self.decrement();
        snapshot
    }

    // ── Relational operators ───────────────────────────────────────────
    //
    // These are partial: comparing graphs of different sizes is an error,
    // not `false`. Total structural equality stays on the derived PartialEq.

    /// Returns true if all cells are equal.
    ///
    /// Vacuously true for two empty graphs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_eq(&self, other: &Graph) -> Result<bool> {
        self.check_same_size(other)?;
        Ok(self.matrix() == other.matrix())
    }

    /// Returns true if any cell differs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_ne(&self, other: &Graph) -> Result<bool> {
        Ok(!self.try_eq(other)?)
    }

    /// Returns true if **every** cell of `self` is strictly less than the
    /// corresponding cell of `other`.
    ///
    /// A cell-wise strict partial order: not lexicographic, not based on edge
    /// counts. Vacuously true for two empty graphs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_lt(&self, other: &Graph) -> Result<bool> {
        self.check_same_size(other)?;
        Ok(self
            .matrix()
            .iter()
            .zip(other.matrix())
            .all(|(left_row, right_row)| {
                left_row.iter().zip(right_row).all(|(l, r)| l < r)
            }))
    }

    /// Returns true if `self` is strictly less than or equal to `other`.
    ///
    /// Defined exactly as `try_lt || try_eq`. This is NOT "every cell ≤": two
    /// graphs that are element-wise non-decreasing but neither strictly less
    /// everywhere nor equal compare as `false`. The definition is intended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_le(&self, other: &Graph) -> Result<bool> {
        Ok(self.try_lt(other)? || self.try_eq(other)?)
    }

    /// Returns true if `self` is greater than `other`, defined as the
    /// negation of [`Graph::try_le`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_gt(&self, other: &Graph) -> Result<bool> {
        Ok(!self.try_le(other)?)
    }

    /// Returns true if `self` is greater than or equal to `other`, defined as
    /// the negation of [`Graph::try_lt`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vertex counts differ.
    pub fn try_ge(&self, other: &Graph) -> Result<bool> {
        Ok(!self.try_lt(other)?)
    }

    // ── Internal helpers ───────────────────────────────────────────────

    fn check_same_size(&self, other: &Graph) -> Result<()> {
        if self.vertex_count() != other.vertex_count() {
            return Err(Error::DimensionMismatch {
                left: self.vertex_count(),
                right: other.vertex_count(),
            });
        }
        Ok(())
    }

    fn check_non_empty_pair(&self, other: &Graph) -> Result<()> {
        if self.is_empty() || other.is_empty() {
            return Err(Error::EmptyOperand);
        }
        Ok(())
    }

    fn for_each_cell_mut(&mut self, f: impl Fn(&mut i32)) {
        let n = self.vertex_count();
        for i in 0..n {
            for j in 0..n {
                f(self.cell_mut(i, j));
            }
        }
    }

    /// Applies `f(self[i][j], other[i][j])` into every cell of `self`.
    /// Callers must have checked dimensions already.
    fn zip_cells_in_place(&mut self, other: &Graph, f: impl Fn(i32, i32) -> i32) {
        let n = self.vertex_count();
        for i in 0..n {
            for j in 0..n {
                let combined = f(self.cell(i, j), other.cell(i, j));
                *self.cell_mut(i, j) = combined;
            }
        }
    }
}

/// Unary minus: negates every cell. The unary plus counterpart is the
/// identity and maps to `Clone::clone`.
impl Neg for &Graph {
    type Output = Graph;

    fn neg(self) -> Graph {
        let mut result = self.clone();
        result.for_each_cell_mut(|cell| *cell = cell.wrapping_neg());
        result
    }
}

impl Neg for Graph {
    type Output = Graph;

    fn neg(self) -> Graph {
        -&self
    }
}
