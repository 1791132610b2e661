//! spcell - CSR sparse matrix engine
//!
//! This library provides a compressed-sparse-row matrix engine: a canonical
//! immutable store, lazy cell traversal, generic transform combinators and
//! structural composition operators, letting matrix algebra be expressed as
//! composable passes over the sparse structure.
//!
//! ## Architecture
//!
//! spcell follows a clean value/engine separation:
//!
//! - **spcell-core**: the store, the triple builder and invariant
//!   validation (no_std, no I/O)
//! - **spcell**: traversal, combinators, structural composition, graph
//!   algebra and change tracking
//!
//! ## Quick Start
//!
//! ```rust
//! use spcell::{laplacian, non_zero_cells, Cell, CsrMatrix};
//!
//! fn example() -> spcell::Result<()> {
//!     // 2-node graph with one edge in each direction
//!     let adjacency = CsrMatrix::from_cells(
//!         2,
//!         2,
//!         [Cell::new(0, 1, 1.0), Cell::new(1, 0, 1.0)],
//!     )?;
//!
//!     let lap = laplacian(&adjacency)?;
//!     for cell in non_zero_cells(&lap) {
//!         println!("({}, {}) = {}", cell.row, cell.col, cell.value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Traversal contract
//!
//! Every combinator takes a cell iterator as an explicit argument, so the
//! caller chooses sparse ([`non_zero_cells`]) or dense ([`all_cells`])
//! semantics per call. Iterators are pure views over an immutable store:
//! finite, single-pass, restartable by re-invocation, and safe to run from
//! several readers at once.

// Re-export the core value types
pub use spcell_core::{
    // Value types
    Cell, CsrMatrix,
    // Element constraints
    DataType, MatrixElement,
    // Error handling
    CsrError, Result,
    // Access traits
    MatrixOperations, SparseMatrix,
    // Invariant checks
    validation,
};

// Engine modules
pub mod algebra;
pub mod compose;
pub mod ops;
pub mod traverse;

// Change tracking
pub mod observe;

// Observability export
#[cfg(feature = "serde")]
pub mod export;

// Public surface
pub use algebra::{degree_matrix, laplacian, row_wise_spgemm, sp_add, sp_mv};
pub use compose::{embed, embed_in_place, overlay, submatrix};
pub use observe::{MatrixEvent, SubscriptionToken, TrackedMatrix};
pub use ops::{combine, filter, fold, map, reduce};
pub use traverse::{all_cells, non_zero_cells, row_slice, AllCells, NonZeroCells};
