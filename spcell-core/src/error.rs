//! Error types for CSR construction and traversal
//!
//! Every error is local to the single operation that raised it: a failed
//! build leaves no partially constructed matrix, and a failed traversal
//! invalidates nothing already yielded. Out-of-range reads through
//! `CsrMatrix::get` are defined behavior (zero), not errors.

/// Errors that can occur during CSR operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrError {
    /// A construction cell lies outside the declared dimensions
    OutOfBoundsCell {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Two non-zero construction cells share a coordinate
    DuplicateCell { row: usize, col: usize },
    /// A traversal request named a row outside the matrix
    InvalidRowIndex { row: usize, rows: usize },
    /// A submatrix range is inverted or exceeds the axis length
    InvalidRange { from: usize, to: usize, len: usize },
    /// Reduce without a seed over a matrix with no stored cells
    EmptyReduce,
    /// Two arrays that must agree in length do not
    LengthMismatch { expected: usize, got: usize },
    /// Inner dimensions of a matrix product do not agree
    DimensionMismatch { left: usize, right: usize },
    /// Row pointers are not a non-decreasing offset index
    BrokenRowPointers,
    /// Pre-built arrays carry an explicit zero value
    StoredZero { row: usize, col: usize },
    /// Column indices within a row are not strictly increasing
    UnsortedColumns { row: usize },
}

impl core::fmt::Display for CsrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CsrError::OutOfBoundsCell {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "cell ({row}, {col}) exceeds matrix dimensions {rows}x{cols}"
            ),
            CsrError::DuplicateCell { row, col } => {
                write!(f, "duplicate cell at ({row}, {col})")
            }
            CsrError::InvalidRowIndex { row, rows } => {
                write!(f, "invalid row index {row} for {rows} rows")
            }
            CsrError::InvalidRange { from, to, len } => {
                write!(f, "invalid range {from}..={to} for axis of length {len}")
            }
            CsrError::EmptyReduce => {
                write!(f, "reduce of empty matrix with no initial value")
            }
            CsrError::LengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {expected}, got {got}")
            }
            CsrError::DimensionMismatch { left, right } => {
                write!(f, "inner dimensions do not agree: {left} vs {right}")
            }
            CsrError::BrokenRowPointers => write!(f, "row pointers are not non-decreasing"),
            CsrError::StoredZero { row, col } => {
                write!(f, "explicit zero stored at ({row}, {col})")
            }
            CsrError::UnsortedColumns { row } => {
                write!(f, "column indices in row {row} are not strictly increasing")
            }
        }
    }
}

/// Result type for CSR operations
pub type Result<T> = core::result::Result<T, CsrError>;
