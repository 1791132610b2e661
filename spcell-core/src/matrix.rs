//! The canonical compressed-sparse-row matrix value
//!
//! A [`CsrMatrix`] is immutable after construction. Every operator in the
//! engine produces a brand-new matrix; the three storage arrays are exposed
//! read-only so an orchestration layer can log them.
//!
//! Structural invariants, upheld by every constructor:
//! 1. `row_ptrs` is non-decreasing with `row_ptrs[0] == 0` and
//!    `row_ptrs[rows]` equal to the stored entry count.
//! 2. Column indices are strictly increasing within each row.
//! 3. No stored value is the additive identity.
//! 4. Every stored coordinate lies within the declared dimensions.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::element::MatrixElement;
use crate::error::{CsrError, Result};

/// Compressed-sparse-row matrix with declared dimensions
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsrMatrix<T: MatrixElement> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) values: Vec<T>,
    pub(crate) col_indices: Vec<usize>,
    pub(crate) row_ptrs: Vec<usize>,
}

impl<T: MatrixElement> CsrMatrix<T> {
    /// Create a matrix with no stored entries
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: Vec::new(),
            col_indices: Vec::new(),
            row_ptrs: vec![0; rows + 1],
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Whether the matrix stores no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored values, row-major
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Column index per stored value
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Per-row offsets into `values`/`col_indices`, length `rows + 1`
    pub fn row_ptrs(&self) -> &[usize] {
        &self.row_ptrs
    }

    /// Value at a coordinate
    ///
    /// Returns zero both for in-bounds coordinates with no stored entry and
    /// for coordinates outside the declared dimensions. An out-of-range read
    /// means "no such cell", never a fault.
    pub fn get(&self, row: usize, col: usize) -> T {
        if row >= self.rows || col >= self.cols {
            return T::zero();
        }

        let start = self.row_ptrs[row];
        let end = self.row_ptrs[row + 1];

        match self.col_indices[start..end].binary_search(&col) {
            Ok(offset) => self.values[start + offset],
            Err(_) => T::zero(),
        }
    }

    /// Half-open index range of a row's entries in `values`/`col_indices`
    ///
    /// Fails with [`CsrError::InvalidRowIndex`] for rows outside the matrix.
    pub fn row_bounds(&self, row: usize) -> Result<(usize, usize)> {
        if row >= self.rows {
            return Err(CsrError::InvalidRowIndex {
                row,
                rows: self.rows,
            });
        }
        Ok((self.row_ptrs[row], self.row_ptrs[row + 1]))
    }

    /// Approximate heap footprint of the three storage arrays in bytes
    pub fn memory_usage(&self) -> usize {
        let ptr_size = self.row_ptrs.len() * core::mem::size_of::<usize>();
        let index_size = self.col_indices.len() * core::mem::size_of::<usize>();
        let value_size = self.values.len() * T::size_bytes();
        ptr_size + index_size + value_size
    }

    /// One-line human-readable summary naming the three storage arrays
    ///
    /// This is the string an orchestration layer embeds in its log events.
    pub fn summary(&self) -> String {
        use core::fmt::Write;

        let mut out = String::new();
        let _ = write!(
            out,
            "CSR {}x{} {}, nnz={}, row_ptrs={:?}, col_indices={:?}, values=[",
            self.rows,
            self.cols,
            T::data_type(),
            self.nnz(),
            self.row_ptrs,
            self.col_indices,
        );
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                let _ = write!(out, ", ");
            }
            let _ = write!(out, "{value}");
        }
        out.push(']');
        out
    }
}

impl<T: MatrixElement> core::fmt::Display for CsrMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.summary())
    }
}
