use rand::distributions::WeightedError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("index ({row}, {col}) out of bounds for a {rows}x{columns} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    #[error("cannot compute the trace of a non-square {rows}x{columns} matrix")]
    NonSquare { rows: usize, columns: usize },

    /// Shapes are `(rows, columns)`.
    #[error("source of shape {found:?} does not fit a matrix of shape {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("invalid range: lower bound is greater than upper bound")]
    InvalidRange,

    #[error("invalid weights: {0}")]
    InvalidWeights(#[from] WeightedError),
}
