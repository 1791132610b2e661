//! The ephemeral cell triple used during construction and traversal
//!
//! A [`Cell`] is never stored inside a matrix; it only communicates
//! structure between the builder, the iterators and the operators.

use crate::element::MatrixElement;

/// A single (row, col, value) matrix entry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T: MatrixElement> {
    /// Row coordinate (0-based)
    pub row: usize,
    /// Column coordinate (0-based)
    pub col: usize,
    /// Stored value; zero-valued cells are dropped at every rebuild
    pub value: T,
}

impl<T: MatrixElement> Cell<T> {
    /// Create a new cell
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Whether this cell carries the additive identity
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The same cell shifted by a (row, col) offset
    pub fn offset(self, row_offset: usize, col_offset: usize) -> Self {
        Self {
            row: self.row + row_offset,
            col: self.col + col_offset,
            value: self.value,
        }
    }

    /// The same coordinate with a different value
    pub fn with_value<U: MatrixElement>(self, value: U) -> Cell<U> {
        Cell {
            row: self.row,
            col: self.col,
            value,
        }
    }
}
