//! Construction of [`CsrMatrix`] values from unordered cell triples
//!
//! The builder is the single funnel through which every operator rebuilds
//! its result, so the structural invariants only have to be established
//! here. Construction either fully succeeds or the attempt is discarded.

use alloc::vec;
use alloc::vec::Vec;

use crate::cell::Cell;
use crate::element::MatrixElement;
use crate::error::{CsrError, Result};
use crate::matrix::CsrMatrix;

impl<T: MatrixElement> CsrMatrix<T> {
    /// Build a matrix from an unordered sequence of cells
    ///
    /// Every input cell is bounds-checked against the declared dimensions
    /// ([`CsrError::OutOfBoundsCell`]). Zero-valued cells are dropped before
    /// emission. Among the surviving cells a duplicate coordinate is
    /// rejected with [`CsrError::DuplicateCell`]; a zero-valued duplicate of
    /// a stored coordinate is not an error since it would never have been
    /// stored anyway.
    ///
    /// O(n log n) in the number of input cells.
    pub fn from_cells<I>(rows: usize, cols: usize, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = Cell<T>>,
    {
        let mut kept: Vec<Cell<T>> = Vec::new();
        for cell in cells {
            if cell.row >= rows || cell.col >= cols {
                return Err(CsrError::OutOfBoundsCell {
                    row: cell.row,
                    col: cell.col,
                    rows,
                    cols,
                });
            }
            if !cell.is_zero() {
                kept.push(cell);
            }
        }

        kept.sort_by(|a, b| a.row.cmp(&b.row).then(a.col.cmp(&b.col)));

        let mut values = Vec::with_capacity(kept.len());
        let mut col_indices = Vec::with_capacity(kept.len());
        let mut row_ptrs = vec![0usize; rows + 1];

        let mut current_row = 0usize;
        let mut count = 0usize;

        for cell in &kept {
            if count > 0 {
                let prev = kept[count - 1];
                if prev.row == cell.row && prev.col == cell.col {
                    return Err(CsrError::DuplicateCell {
                        row: cell.row,
                        col: cell.col,
                    });
                }
            }

            // Backfill pointers for every row skipped since the last entry.
            while current_row < cell.row {
                row_ptrs[current_row + 1] = count;
                current_row += 1;
            }

            col_indices.push(cell.col);
            values.push(cell.value);
            count += 1;
        }

        while current_row < rows {
            row_ptrs[current_row + 1] = count;
            current_row += 1;
        }

        Ok(Self {
            rows,
            cols,
            values,
            col_indices,
            row_ptrs,
        })
    }

    /// Build a square matrix carrying `diagonal` on its main diagonal
    ///
    /// Zero diagonal entries are dropped like any other zero cell.
    pub fn from_diagonal(diagonal: &[T]) -> Self {
        let cells = diagonal
            .iter()
            .enumerate()
            .map(|(i, &value)| Cell::new(i, i, value));

        // Coordinates are unique and in-bounds by construction.
        match Self::from_cells(diagonal.len(), diagonal.len(), cells) {
            Ok(matrix) => matrix,
            Err(_) => unreachable!("diagonal cells are unique and in-bounds"),
        }
    }

    /// Assemble a matrix from pre-built CSR arrays, validating every invariant
    ///
    /// Fails with the invariant-specific error: [`CsrError::LengthMismatch`]
    /// when the arrays disagree in length or `row_ptrs` is not `rows + 1`
    /// long, [`CsrError::BrokenRowPointers`] when the pointer index is not a
    /// non-decreasing offset run from 0 to the entry count,
    /// [`CsrError::UnsortedColumns`] / [`CsrError::OutOfBoundsCell`] for bad
    /// column data, and [`CsrError::StoredZero`] for an explicit zero value
    /// (zero is never stored, so a zero here means the arrays were built by
    /// hand incorrectly).
    pub fn from_parts(
        rows: usize,
        cols: usize,
        values: Vec<T>,
        col_indices: Vec<usize>,
        row_ptrs: Vec<usize>,
    ) -> Result<Self> {
        let matrix = Self {
            rows,
            cols,
            values,
            col_indices,
            row_ptrs,
        };
        crate::validation::validate(&matrix)?;
        Ok(matrix)
    }
}
