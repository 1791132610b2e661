//! Lazy cell traversal over a CSR store
//!
//! Two traversal strategies share one contract: [`non_zero_cells`] walks only
//! the stored entries, [`all_cells`] walks the full `rows * cols` coordinate
//! space synthesizing zeros for unstored positions. Both yield cells in
//! row-major, column-ascending order, borrow the store immutably, and can be
//! restarted by re-invoking on the same store. A combinator takes one of
//! these as an explicit argument, so the caller picks sparse or dense
//! semantics per call.

use spcell_core::{Cell, CsrMatrix, MatrixElement, Result};

/// Half-open index range of a row's entries in the storage arrays
///
/// Fails with `InvalidRowIndex` for rows outside `[0, rows)`.
pub fn row_slice<T: MatrixElement>(matrix: &CsrMatrix<T>, row: usize) -> Result<(usize, usize)> {
    matrix.row_bounds(row)
}

/// Iterator over the stored cells of a matrix
///
/// Row-major, column-ascending; exact-sized at `nnz`.
pub fn non_zero_cells<T: MatrixElement>(matrix: &CsrMatrix<T>) -> NonZeroCells<'_, T> {
    NonZeroCells {
        matrix,
        row: 0,
        index: 0,
    }
}

/// Iterator over every coordinate of a matrix, zeros included
///
/// Produces `rows * cols` cells in row-major order. Dense-semantics
/// consumers (full matrix subtraction, thresholding of implicit zeros) use
/// this in place of [`non_zero_cells`].
pub fn all_cells<T: MatrixElement>(matrix: &CsrMatrix<T>) -> AllCells<'_, T> {
    AllCells {
        matrix,
        row: 0,
        col: 0,
        cursor: 0,
    }
}

/// See [`non_zero_cells`]
pub struct NonZeroCells<'a, T: MatrixElement> {
    matrix: &'a CsrMatrix<T>,
    row: usize,
    index: usize,
}

impl<T: MatrixElement> Iterator for NonZeroCells<'_, T> {
    type Item = Cell<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.matrix.nnz() {
            return None;
        }

        // Skip row boundaries (possibly several empty rows) until the
        // current index falls inside the current row's slice.
        while self.index >= self.matrix.row_ptrs()[self.row + 1] {
            self.row += 1;
        }

        let cell = Cell::new(
            self.row,
            self.matrix.col_indices()[self.index],
            self.matrix.values()[self.index],
        );
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.nnz() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: MatrixElement> ExactSizeIterator for NonZeroCells<'_, T> {}

/// See [`all_cells`]
pub struct AllCells<'a, T: MatrixElement> {
    matrix: &'a CsrMatrix<T>,
    row: usize,
    col: usize,
    /// Position of the next stored entry at or after (row, col)
    cursor: usize,
}

impl<T: MatrixElement> Iterator for AllCells<'_, T> {
    type Item = Cell<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.matrix.rows() || self.matrix.cols() == 0 {
            return None;
        }

        let value = if self.cursor < self.matrix.row_ptrs()[self.row + 1]
            && self.matrix.col_indices()[self.cursor] == self.col
        {
            let v = self.matrix.values()[self.cursor];
            self.cursor += 1;
            v
        } else {
            T::zero()
        };

        let cell = Cell::new(self.row, self.col, value);

        self.col += 1;
        if self.col >= self.matrix.cols() {
            self.col = 0;
            self.row += 1;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.matrix.rows() * self.matrix.cols();
        let consumed = self.row * self.matrix.cols() + self.col;
        let remaining = total - consumed;
        (remaining, Some(remaining))
    }
}

impl<T: MatrixElement> ExactSizeIterator for AllCells<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsrMatrix<f64> {
        // [0 5 0 1]
        // [7 0 0 0]
        // [0 0 0 0]
        // [0 0 0 4]
        CsrMatrix::from_cells(
            4,
            4,
            [
                Cell::new(0, 1, 5.0),
                Cell::new(0, 3, 1.0),
                Cell::new(1, 0, 7.0),
                Cell::new(3, 3, 4.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_non_zero_cells_row_major() {
        let m = sample();
        let cells: Vec<_> = non_zero_cells(&m).collect();
        assert_eq!(
            cells,
            [
                Cell::new(0, 1, 5.0),
                Cell::new(0, 3, 1.0),
                Cell::new(1, 0, 7.0),
                Cell::new(3, 3, 4.0),
            ]
        );
    }

    #[test]
    fn test_non_zero_cells_skips_empty_rows() {
        let m = CsrMatrix::from_cells(5, 2, [Cell::new(4, 1, 9i32)]).unwrap();
        let cells: Vec<_> = non_zero_cells(&m).collect();
        assert_eq!(cells, [Cell::new(4, 1, 9)]);
    }

    #[test]
    fn test_non_zero_cells_is_exact_sized() {
        let m = sample();
        let mut iter = non_zero_cells(&m);
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_all_cells_synthesizes_zeros() {
        let m = CsrMatrix::from_cells(2, 2, [Cell::new(0, 1, 3.0f64)]).unwrap();
        let cells: Vec<_> = all_cells(&m).collect();
        assert_eq!(
            cells,
            [
                Cell::new(0, 0, 0.0),
                Cell::new(0, 1, 3.0),
                Cell::new(1, 0, 0.0),
                Cell::new(1, 1, 0.0),
            ]
        );
    }

    #[test]
    fn test_all_cells_counts_full_space() {
        let m = sample();
        assert_eq!(all_cells(&m).count(), 16);
        let empty: CsrMatrix<f64> = CsrMatrix::empty(0, 7);
        assert_eq!(all_cells(&empty).count(), 0);
        let no_cols: CsrMatrix<f64> = CsrMatrix::empty(3, 0);
        assert_eq!(all_cells(&no_cols).count(), 0);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let m = sample();
        let first: Vec<_> = non_zero_cells(&m).collect();
        let second: Vec<_> = non_zero_cells(&m).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_readers() {
        let m = sample();
        let mut a = non_zero_cells(&m);
        let mut b = all_cells(&m);
        assert_eq!(a.next(), Some(Cell::new(0, 1, 5.0)));
        assert_eq!(b.next(), Some(Cell::new(0, 0, 0.0)));
        assert_eq!(a.next(), Some(Cell::new(0, 3, 1.0)));
    }

    #[test]
    fn test_row_slice_bounds() {
        let m = sample();
        assert_eq!(row_slice(&m, 0).unwrap(), (0, 2));
        assert_eq!(row_slice(&m, 2).unwrap(), (3, 3));
        assert!(row_slice(&m, 4).is_err());
    }
}
