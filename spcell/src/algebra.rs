//! Graph and matrix algebra expressed through the engine's combinators
//!
//! The canonical adjacency -> degree -> Laplacian chain plus the sparse
//! kernels every graph workload leans on: pointwise addition, matrix-vector
//! multiply and the row-wise sparse product.

use core::ops::{Add, Mul, Sub};

use hashbrown::HashMap;
use spcell_core::{Cell, CsrError, CsrMatrix, MatrixElement, Result};

use crate::ops::combine;
use crate::traverse::non_zero_cells;

/// Pointwise sum of two sparse matrices
///
/// Any pointwise scalar operator fits this primitive; use
/// [`combine`](crate::ops::combine) directly for operators other than `+`.
pub fn sp_add<T>(a: &CsrMatrix<T>, b: &CsrMatrix<T>) -> Result<CsrMatrix<T>>
where
    T: MatrixElement + Add<Output = T>,
{
    combine(a, b, non_zero_cells(a), non_zero_cells(b), |x, y| x + y)
}

/// Diagonal matrix of weighted row sums
///
/// For a 0/1 adjacency matrix this is the vertex degree matrix; for a
/// weighted graph it is the weighted degree. Isolated rows contribute no
/// diagonal entry.
pub fn degree_matrix<T>(adjacency: &CsrMatrix<T>) -> CsrMatrix<T>
where
    T: MatrixElement + Add<Output = T>,
{
    let mut degrees = vec![T::zero(); adjacency.rows()];
    for cell in non_zero_cells(adjacency) {
        degrees[cell.row] = degrees[cell.row] + cell.value;
    }
    CsrMatrix::from_diagonal(&degrees)
}

/// Graph Laplacian: degree matrix minus adjacency matrix
///
/// Built with [`combine`], so a vertex's self-loop folds through the
/// two-phase contract like any other shared coordinate.
pub fn laplacian<T>(adjacency: &CsrMatrix<T>) -> Result<CsrMatrix<T>>
where
    T: MatrixElement + Add<Output = T> + Sub<Output = T>,
{
    let degree = degree_matrix(adjacency);
    combine(
        &degree,
        adjacency,
        non_zero_cells(&degree),
        non_zero_cells(adjacency),
        |d, a| d - a,
    )
}

/// Sparse matrix by dense vector product, `y = A * x`
///
/// `x` must have one entry per matrix column.
pub fn sp_mv<T>(matrix: &CsrMatrix<T>, x: &[T]) -> Result<Vec<T>>
where
    T: MatrixElement + Add<Output = T> + Mul<Output = T>,
{
    if x.len() != matrix.cols() {
        return Err(CsrError::LengthMismatch {
            expected: matrix.cols(),
            got: x.len(),
        });
    }

    let mut y = vec![T::zero(); matrix.rows()];
    for cell in non_zero_cells(matrix) {
        y[cell.row] = y[cell.row] + cell.value * x[cell.col];
    }
    Ok(y)
}

/// Row-wise sparse matrix product, `C = A * B`
///
/// For each row of A, scatter `a_ik * B(k, :)` into a per-row accumulator;
/// exact zeros produced by cancellation are dropped on rebuild. Fails with
/// `DimensionMismatch` unless A's column count equals B's row count.
pub fn row_wise_spgemm<T>(a: &CsrMatrix<T>, b: &CsrMatrix<T>) -> Result<CsrMatrix<T>>
where
    T: MatrixElement + Add<Output = T> + Mul<Output = T>,
{
    if a.cols() != b.rows() {
        return Err(CsrError::DimensionMismatch {
            left: a.cols(),
            right: b.rows(),
        });
    }

    let mut cells = Vec::new();
    for row in 0..a.rows() {
        let mut accumulator: HashMap<usize, T> = HashMap::new();

        let (start, end) = a.row_bounds(row)?;
        for i in start..end {
            let k = a.col_indices()[i];
            let a_value = a.values()[i];

            let (b_start, b_end) = b.row_bounds(k)?;
            for j in b_start..b_end {
                let col = b.col_indices()[j];
                let product = a_value * b.values()[j];
                let entry = accumulator.get(&col).copied().unwrap_or_else(T::zero);
                accumulator.insert(col, entry + product);
            }
        }

        cells.extend(
            accumulator
                .into_iter()
                .map(|(col, value)| Cell::new(row, col, value)),
        );
    }

    CsrMatrix::from_cells(a.rows(), b.cols(), cells)
}
