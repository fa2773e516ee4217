use thiserror::Error;

/// Top-level error type for the Planekit toolkit.
#[derive(Debug, Error)]
pub enum PlanekitError {
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// Errors raised by matrix operations.
///
/// Geometry operations never fail; their undefined outcomes are `Option`s.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlgebraError {
    #[error("{}", mismatch_message(.op, .left, .right))]
    DimensionMismatch {
        op: MatrixOp,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Matrix operation that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    Add,
    Multiply,
}

fn mismatch_message(op: &MatrixOp, left: &(usize, usize), right: &(usize, usize)) -> String {
    let reason = match op {
        MatrixOp::Add => "matrices must have the same dimensions to be added",
        MatrixOp::Multiply => {
            "number of columns of the first matrix must equal the number of rows of the second matrix"
        }
    };
    format!("{reason} ({}x{} vs {}x{})", left.0, left.1, right.0, right.1)
}

/// Convenience type alias for results using [`PlanekitError`].
pub type Result<T> = std::result::Result<T, PlanekitError>;
