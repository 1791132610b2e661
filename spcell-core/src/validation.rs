//! Structural invariant validation for CSR matrices
//!
//! Pure functions with no I/O. Every constructor in this crate funnels
//! through these checks either implicitly (the builder establishes the
//! invariants) or explicitly (`from_parts` runs [`validate`] on caller-built
//! arrays).

use crate::element::MatrixElement;
use crate::error::{CsrError, Result};
use crate::matrix::CsrMatrix;

/// Check every structural invariant of a CSR matrix
///
/// Returns the first violation found, walking cheap shape checks before
/// per-entry checks.
pub fn validate<T: MatrixElement>(matrix: &CsrMatrix<T>) -> Result<()> {
    validate_shape(matrix)?;
    validate_row_pointers(matrix.row_ptrs(), matrix.nnz())?;
    validate_entries(matrix)
}

/// Check array lengths against the declared dimensions
pub fn validate_shape<T: MatrixElement>(matrix: &CsrMatrix<T>) -> Result<()> {
    if matrix.row_ptrs().len() != matrix.rows() + 1 {
        return Err(CsrError::LengthMismatch {
            expected: matrix.rows() + 1,
            got: matrix.row_ptrs().len(),
        });
    }
    if matrix.col_indices().len() != matrix.values().len() {
        return Err(CsrError::LengthMismatch {
            expected: matrix.values().len(),
            got: matrix.col_indices().len(),
        });
    }
    Ok(())
}

/// Check that `row_ptrs` is a non-decreasing offset run from 0 to `nnz`
pub fn validate_row_pointers(row_ptrs: &[usize], nnz: usize) -> Result<()> {
    // A valid pointer array has rows + 1 entries, so never zero.
    if row_ptrs.is_empty() || row_ptrs[0] != 0 {
        return Err(CsrError::BrokenRowPointers);
    }
    if row_ptrs.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(CsrError::BrokenRowPointers);
    }
    if row_ptrs[row_ptrs.len() - 1] != nnz {
        return Err(CsrError::BrokenRowPointers);
    }
    Ok(())
}

/// Check per-entry invariants: column order, bounds, and no stored zero
fn validate_entries<T: MatrixElement>(matrix: &CsrMatrix<T>) -> Result<()> {
    let col_indices = matrix.col_indices();
    let values = matrix.values();

    for row in 0..matrix.rows() {
        let start = matrix.row_ptrs()[row];
        let end = matrix.row_ptrs()[row + 1];

        for i in start..end {
            let col = col_indices[i];
            if col >= matrix.cols() {
                return Err(CsrError::OutOfBoundsCell {
                    row,
                    col,
                    rows: matrix.rows(),
                    cols: matrix.cols(),
                });
            }
            if i > start && col_indices[i - 1] >= col {
                return Err(CsrError::UnsortedColumns { row });
            }
            if values[i].is_zero() {
                return Err(CsrError::StoredZero { row, col });
            }
        }
    }
    Ok(())
}
