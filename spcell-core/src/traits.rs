//! Core traits for sparse matrix access
//!
//! These are the format-agnostic interfaces an orchestration layer codes
//! against; [`CsrMatrix`](crate::matrix::CsrMatrix) is the one concrete
//! implementation in this workspace.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::element::MatrixElement;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column extraction (requires alloc)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// All stored cells in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<crate::cell::Cell<Self::Element>>;

    /// All stored cells in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<crate::cell::Cell<Self::Element>>;
}

#[cfg(feature = "alloc")]
mod csr_impls {
    use super::*;
    use crate::cell::Cell;
    use crate::matrix::CsrMatrix;

    impl<T: MatrixElement> SparseMatrix for CsrMatrix<T> {
        type Element = T;

        fn get_element(&self, row: usize, col: usize) -> Option<T> {
            let value = self.get(row, col);
            if value.is_zero() {
                None
            } else {
                Some(value)
            }
        }

        fn dimensions(&self) -> (usize, usize) {
            CsrMatrix::dimensions(self)
        }

        fn nnz(&self) -> usize {
            CsrMatrix::nnz(self)
        }
    }

    impl<T: MatrixElement> MatrixOperations for CsrMatrix<T> {
        fn get_row(&self, row_index: usize) -> Vec<Cell<T>> {
            let Ok((start, end)) = self.row_bounds(row_index) else {
                return Vec::new();
            };
            (start..end)
                .map(|i| Cell::new(row_index, self.col_indices()[i], self.values()[i]))
                .collect()
        }

        fn get_col(&self, col_index: usize) -> Vec<Cell<T>> {
            let mut cells = Vec::new();
            for row in 0..self.rows() {
                let value = self.get(row, col_index);
                if !value.is_zero() {
                    cells.push(Cell::new(row, col_index, value));
                }
            }
            cells
        }
    }

}
