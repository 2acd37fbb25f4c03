use thiserror::Error;

/// Raised when matrix operands (or network parameters) have incompatible
/// dimensions. Shapes are always `(rows, cols)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Two operands cannot be combined by `op`.
    #[error("shape mismatch in {op}: {left:?} vs {right:?}")]
    Mismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Construction data is not rectangular.
    #[error("ragged matrix data: row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Construction data (or a dataset) has no elements.
    #[error("cannot build from empty data")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ShapeError>;
