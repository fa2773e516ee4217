use std::fmt;

use nalgebra::DMatrix;

use crate::error::{AlgebraError, MatrixOp, PlanekitError, Result};
use crate::math::{format_number, TOLERANCE};

/// A dense `rows x cols` matrix of `f64`.
///
/// Every arithmetic operation returns a new matrix; only [`Matrix::set`] mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix with every entry set to `fill`.
    #[must_use]
    pub fn new(fill: f64, rows: usize, cols: usize) -> Self {
        Self {
            data: DMatrix::from_element(rows, cols, fill),
        }
    }

    /// Builds a matrix from row-major data.
    ///
    /// An empty or ragged array yields the 1x1 zero matrix.
    #[must_use]
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if n_cols == 0 || rows.iter().any(|r| r.as_ref().len() != n_cols) {
            tracing::debug!(
                rows = n_rows,
                "empty or ragged rows, falling back to the 1x1 zero matrix"
            );
            return Self::default();
        }
        Self {
            data: DMatrix::from_fn(n_rows, n_cols, |i, j| rows[i].as_ref()[j]),
        }
    }

    /// Creates the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            data: DMatrix::identity(n, n),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns the underlying `nalgebra` storage.
    #[must_use]
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::IndexOutOfBounds` if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[(row, col)])
    }

    /// Overwrites the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::IndexOutOfBounds` if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_index(row, col)?;
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(MatrixOp::Add, other));
        }
        Ok(Self {
            data: &self.data + &other.data,
        })
    }

    /// Matrix product `self * other`, of shape `self.rows() x other.cols()`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(self.mismatch(MatrixOp::Multiply, other));
        }
        let data = DMatrix::from_fn(self.rows(), other.cols(), |i, j| {
            (0..self.cols()).fold(0.0, |sum, k| sum + self.data[(i, k)] * other.data[(k, j)])
        });
        Ok(Self { data })
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.transpose(),
        }
    }

    /// Multiplies every entry by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            data: &self.data * scalar,
        }
    }

    /// Same shape and every entry within `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// [`Matrix::approx_eq`] within [`TOLERANCE`].
    #[must_use]
    pub fn is_close(&self, other: &Self) -> bool {
        self.approx_eq(other, TOLERANCE)
    }

    fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            tracing::debug!(row, col, rows, cols, "matrix index out of bounds");
            return Err(AlgebraError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            }
            .into());
        }
        Ok(())
    }

    fn mismatch(&self, op: MatrixOp, other: &Self) -> PlanekitError {
        tracing::debug!(
            ?op,
            left = ?self.shape(),
            right = ?other.shape(),
            "matrix dimensions are incompatible"
        );
        AlgebraError::DimensionMismatch {
            op,
            left: self.shape(),
            right: other.shape(),
        }
        .into()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new(0.0, 1, 1)
    }
}

impl From<DMatrix<f64>> for Matrix {
    fn from(data: DMatrix<f64>) -> Self {
        Self { data }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.row_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let line: Vec<String> = row.iter().map(|v| format_number(*v)).collect();
            f.write_str(&line.join(" "))?;
        }
        Ok(())
    }
}
