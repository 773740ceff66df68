//! Minimal dense-matrix primitive for the closed-form OLS solve.
//!
//! Only what the normal-equations approach needs: construction, transpose,
//! multiplication, and a partial-pivot Gaussian solve with singularity
//! detection. Matrices are row-major `f64` and small (the regression uses at
//! most 4x4 normal matrices), so no effort goes into blocking or sparsity.

use std::ops::Index;

/// Errors raised by matrix operations.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum MatrixError {
    /// The matrix is singular (a pivot fell below tolerance during
    /// elimination), so the system has no unique solution.
    #[display("matrix is singular to working precision")]
    Singular,
}

/// Dense row-major matrix of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Creates a matrix from nested row vectors.
    ///
    /// # Panics
    ///
    /// Panics if the rows have differing lengths or if `rows` is empty.
    #[must_use]
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        assert!(!rows.is_empty(), "matrix must have at least one row");
        let cols = rows[0].len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            assert_eq!(row.len(), cols, "all rows must have the same length");
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    /// Creates a single-column matrix from a slice.
    #[must_use]
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sets the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.set(c, r, self[(r, c)]);
            }
        }
        out
    }

    /// Matrix multiplication `self * other`.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not match.
    #[must_use]
    pub fn matmul(&self, other: &Self) -> Self {
        assert_eq!(self.cols, other.rows, "inner dimensions must match");
        let mut out = Self::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for k in 0..self.cols {
                let lhs = self[(r, k)];
                if lhs == 0.0 {
                    continue;
                }
                for c in 0..other.cols {
                    let v = out[(r, c)] + lhs * other[(k, c)];
                    out.set(r, c, v);
                }
            }
        }
        out
    }

    /// Solves `self * X = rhs` by Gaussian elimination with partial pivoting.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if a pivot falls below tolerance,
    /// meaning the system has no unique solution.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not square or `rhs` has a mismatched row count.
    pub fn solve(&self, rhs: &Self) -> Result<Self, MatrixError> {
        assert_eq!(self.rows, self.cols, "coefficient matrix must be square");
        assert_eq!(self.rows, rhs.rows, "rhs row count must match");

        let n = self.rows;
        let mut a = self.clone();
        let mut b = rhs.clone();

        // Relative pivot tolerance scaled by the largest input magnitude.
        let max_abs = a.data.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        #[expect(clippy::cast_precision_loss)]
        let tol = f64::EPSILON * max_abs * (n as f64);

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&r1, &r2| a[(r1, col)].abs().total_cmp(&a[(r2, col)].abs()))
                .unwrap_or(col);
            if a[(pivot_row, col)].abs() <= tol {
                return Err(MatrixError::Singular);
            }
            if pivot_row != col {
                a.swap_rows(pivot_row, col);
                b.swap_rows(pivot_row, col);
            }

            let pivot = a[(col, col)];
            for row in (col + 1)..n {
                let factor = a[(row, col)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for c in col..n {
                    let v = a[(row, c)] - factor * a[(col, c)];
                    a.set(row, c, v);
                }
                for c in 0..b.cols {
                    let v = b[(row, c)] - factor * b[(col, c)];
                    b.set(row, c, v);
                }
            }
        }

        // Back substitution.
        let mut x = Self::zeros(n, b.cols);
        for c in 0..b.cols {
            for row in (0..n).rev() {
                let mut sum = b[(row, c)];
                for k in (row + 1)..n {
                    sum -= a[(row, k)] * x[(k, c)];
                }
                x.set(row, c, sum / a[(row, row)]);
            }
        }
        Ok(x)
    }

    /// Returns the inverse, computed by solving against the identity.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the matrix is not invertible.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        self.solve(&Self::identity(self.rows))
    }

    fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(r1 * self.cols + c, r2 * self.cols + c);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}
