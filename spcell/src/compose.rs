//! Structural composition: overlaying and extracting matrix regions
//!
//! `embed` transplants one matrix into another at a coordinate offset,
//! combining overlapping values through a caller-supplied operator and
//! growing the result when the target sticks out past the base's declared
//! extent. `submatrix` is the inverse direction: rectangular extraction
//! with re-indexing.

use hashbrown::HashMap;
use spcell_core::{Cell, CsrError, CsrMatrix, MatrixElement, Result};

/// Overlay `target` onto `base` at `position`, combining via `trans_op`
///
/// Every coordinate of `target`'s full coordinate space is visited (dense
/// iteration, implicit zeros included). For each, the transplanted
/// coordinate is `(row + position.0, col + position.1)`; the result cell is
/// `trans_op(base_value, target_value)` with zero results removed, so an
/// operator like subtraction can cancel base cells entirely. Base cells
/// outside the target's footprint pass through untouched.
///
/// Result dimensions are `max(base dims, position + target dims)` per axis;
/// embedding beyond the current extent silently grows the matrix.
pub fn embed<T, F>(
    base: &CsrMatrix<T>,
    target: &CsrMatrix<T>,
    position: (usize, usize),
    mut trans_op: F,
) -> Result<CsrMatrix<T>>
where
    T: MatrixElement,
    F: FnMut(T, T) -> T,
{
    let (row_offset, col_offset) = position;

    let mut merged: HashMap<(usize, usize), T> = HashMap::with_capacity(base.nnz());
    for cell in crate::traverse::non_zero_cells(base) {
        merged.insert((cell.row, cell.col), cell.value);
    }

    for row in 0..target.rows() {
        for col in 0..target.cols() {
            let key = (row + row_offset, col + col_offset);
            let base_value = merged.get(&key).copied().unwrap_or_else(T::zero);
            let combined = trans_op(base_value, target.get(row, col));
            if combined.is_zero() {
                merged.remove(&key);
            } else {
                merged.insert(key, combined);
            }
        }
    }

    let rows = base.rows().max(row_offset + target.rows());
    let cols = base.cols().max(col_offset + target.cols());

    CsrMatrix::from_cells(
        rows,
        cols,
        merged
            .into_iter()
            .map(|((row, col), value)| Cell::new(row, col, value)),
    )
}

/// Overlay with the default operator: target overwrites base
pub fn overlay<T: MatrixElement>(
    base: &CsrMatrix<T>,
    target: &CsrMatrix<T>,
    position: (usize, usize),
) -> Result<CsrMatrix<T>> {
    embed(base, target, position, |_, target_value| target_value)
}

/// In-place variant of [`embed`]: the base operand is overwritten
///
/// The one operation in the engine permitted to treat its operand as the
/// object being assigned to. The base is replaced only on success; a failed
/// embed leaves it untouched.
pub fn embed_in_place<T, F>(
    base: &mut CsrMatrix<T>,
    target: &CsrMatrix<T>,
    position: (usize, usize),
    trans_op: F,
) -> Result<()>
where
    T: MatrixElement,
    F: FnMut(T, T) -> T,
{
    *base = embed(base, target, position, trans_op)?;
    Ok(())
}

/// Extract a rectangular region, re-indexed to the origin
///
/// Both ranges are inclusive on both ends. Stored non-zero cells inside the
/// region are kept with `row_range.0` / `col_range.0` subtracted; result
/// dimensions are the range lengths. Fails with `InvalidRange` when a range
/// is inverted or runs past the axis.
pub fn submatrix<T: MatrixElement>(
    matrix: &CsrMatrix<T>,
    row_range: (usize, usize),
    col_range: (usize, usize),
) -> Result<CsrMatrix<T>> {
    let (row_from, row_to) = row_range;
    let (col_from, col_to) = col_range;

    if row_from > row_to || row_to >= matrix.rows() {
        return Err(CsrError::InvalidRange {
            from: row_from,
            to: row_to,
            len: matrix.rows(),
        });
    }
    if col_from > col_to || col_to >= matrix.cols() {
        return Err(CsrError::InvalidRange {
            from: col_from,
            to: col_to,
            len: matrix.cols(),
        });
    }

    let mut cells = Vec::new();
    for row in row_from..=row_to {
        let (start, end) = matrix.row_bounds(row)?;
        for i in start..end {
            let col = matrix.col_indices()[i];
            if col >= col_from && col <= col_to {
                cells.push(Cell::new(row - row_from, col - col_from, matrix.values()[i]));
            }
        }
    }

    CsrMatrix::from_cells(row_to - row_from + 1, col_to - col_from + 1, cells)
}
