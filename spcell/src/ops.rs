//! Generic transform combinators over cell traversals
//!
//! Each combinator is a pure function of a cell-producing iterator plus a
//! user function, and (except the folds) rebuilds its result through the
//! triple builder, so every output satisfies the structural invariants. The
//! iterator argument is what makes a call sparse (`non_zero_cells`) or
//! dense (`all_cells`).

use hashbrown::HashMap;
use spcell_core::{Cell, CsrError, CsrMatrix, MatrixElement, Result};

/// Apply a transform to every produced cell, rebuilding a new matrix
///
/// Cells whose transformed value is zero are dropped. Output dimensions
/// default to `matrix`'s declared dimensions and grow when a transformed
/// coordinate lands outside them.
///
/// A transform that sends two coordinates to the same output coordinate
/// fails with `DuplicateCell`, the engine-wide duplicate policy.
pub fn map<T, U, I, F>(matrix: &CsrMatrix<T>, cells: I, mut transform: F) -> Result<CsrMatrix<U>>
where
    T: MatrixElement,
    U: MatrixElement,
    I: IntoIterator<Item = Cell<T>>,
    F: FnMut(Cell<T>) -> Cell<U>,
{
    let (mut rows, mut cols) = matrix.dimensions();
    let mut produced = Vec::new();

    for cell in cells {
        let out = transform(cell);
        rows = rows.max(out.row + 1);
        cols = cols.max(out.col + 1);
        produced.push(out);
    }

    CsrMatrix::from_cells(rows, cols, produced)
}

/// Keep the produced cells passing a predicate, rebuilding a new matrix
///
/// Zero-valued cells never survive regardless of the predicate, so the
/// operation is idempotent: filtering an already filtered matrix with the
/// same predicate is a no-op. Dimensions are unchanged.
pub fn filter<T, I, F>(matrix: &CsrMatrix<T>, cells: I, mut predicate: F) -> Result<CsrMatrix<T>>
where
    T: MatrixElement,
    I: IntoIterator<Item = Cell<T>>,
    F: FnMut(&Cell<T>) -> bool,
{
    let (rows, cols) = matrix.dimensions();
    CsrMatrix::from_cells(rows, cols, cells.into_iter().filter(|c| predicate(c)))
}

/// Fold the produced cells into an accumulator, row-major order
pub fn fold<T, A, I, F>(cells: I, initial: A, mut reducer: F) -> A
where
    T: MatrixElement,
    I: IntoIterator<Item = Cell<T>>,
    F: FnMut(A, Cell<T>) -> A,
{
    let mut accumulator = initial;
    for cell in cells {
        accumulator = reducer(accumulator, cell);
    }
    accumulator
}

/// Fold without a seed: the first produced cell becomes the accumulator
///
/// Folding begins from the second cell. Fails with `EmptyReduce` when the
/// sequence produces nothing.
pub fn reduce<T, I, F>(cells: I, reducer: F) -> Result<Cell<T>>
where
    T: MatrixElement,
    I: IntoIterator<Item = Cell<T>>,
    F: FnMut(Cell<T>, Cell<T>) -> Cell<T>,
{
    let mut iter = cells.into_iter();
    let seed = iter.next().ok_or(CsrError::EmptyReduce)?;
    Ok(fold(iter, seed, reducer))
}

/// Pointwise union of the coordinates touched by either operand
///
/// The combine map is seeded from A with `combiner(a, 0)`, then every cell
/// of B is folded in as `combiner(existing_or_zero, b)`. A coordinate
/// present in both operands therefore receives `combiner(combiner(a, 0), b)`
/// and NOT `combiner(a, b)`; combiners that are not absorbing over the extra
/// zero application (max, for instance) see the two-phase result. This is
/// the compatibility contract, kept deliberately.
///
/// Result dimensions are the elementwise max of both operands' declared
/// dimensions. The two iterators are drained sequentially, A first.
pub fn combine<T, I, J, F>(
    a: &CsrMatrix<T>,
    b: &CsrMatrix<T>,
    cells_a: I,
    cells_b: J,
    mut combiner: F,
) -> Result<CsrMatrix<T>>
where
    T: MatrixElement,
    I: IntoIterator<Item = Cell<T>>,
    J: IntoIterator<Item = Cell<T>>,
    F: FnMut(T, T) -> T,
{
    let mut merged: HashMap<(usize, usize), T> = HashMap::new();

    for cell in cells_a {
        merged.insert((cell.row, cell.col), combiner(cell.value, T::zero()));
    }

    for cell in cells_b {
        let existing = merged
            .get(&(cell.row, cell.col))
            .copied()
            .unwrap_or_else(T::zero);
        merged.insert((cell.row, cell.col), combiner(existing, cell.value));
    }

    let rows = a.rows().max(b.rows());
    let cols = a.cols().max(b.cols());

    CsrMatrix::from_cells(
        rows,
        cols,
        merged
            .into_iter()
            .map(|((row, col), value)| Cell::new(row, col, value)),
    )
}
