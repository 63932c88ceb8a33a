use thiserror::Error;

/// All errors returned by `linmat-core`.
///
/// Shapes are reported as `(rows, cols)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A matrix was requested with a zero dimension.
    #[error("invalid shape {rows}x{cols}: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// Source data does not hold exactly `rows * cols` values.
    #[error("data length mismatch: expected {expected} values, got {got}")]
    DataLength { expected: usize, got: usize },

    /// Operand shapes are incompatible for the named operation.
    #[error("dimension mismatch in {op}: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// The named operation is only defined for square matrices.
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// A row index is out of bounds.
    #[error("row {row} out of bounds for matrix with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    /// A column index is out of bounds.
    #[error("column {col} out of bounds for matrix with {cols} columns")]
    ColumnOutOfBounds { col: usize, cols: usize },

    /// Elimination found no usable pivot (`|pivot| <= EPSILON`) in `column`.
    #[error("singular matrix: no pivot above threshold in column {column}")]
    SingularMatrix { column: usize },

    /// Elimination succeeded but produced an infinite or NaN entry, from
    /// non-finite input or overflow past a tiny pivot.
    #[error("{op} produced a non-finite result")]
    NonFiniteResult { op: &'static str },

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// The value buffer could not be allocated.
    #[error("out of memory: failed to allocate {size} bytes")]
    OutOfMemory { size: usize },
}

/// Convenience alias used throughout `linmat-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
