#![no_std]

//! spcell-core - Canonical CSR sparse matrix representation
//!
//! This crate provides the value types of the spcell engine: the cell
//! triple, the compressed-row store, the triple builder that turns
//! unordered cells into a validated store, and the structural invariant
//! checks. It holds no traversal or operator logic; that lives in the
//! `spcell` crate.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod cell;
pub mod element;
pub mod error;
pub mod traits;

#[cfg(feature = "alloc")]
pub mod builder;
#[cfg(feature = "alloc")]
pub mod matrix;
#[cfg(feature = "alloc")]
pub mod validation;

pub use cell::Cell;
pub use element::{DataType, MatrixElement};
pub use error::{CsrError, Result};
pub use traits::SparseMatrix;

#[cfg(feature = "alloc")]
pub use matrix::CsrMatrix;
#[cfg(feature = "alloc")]
pub use traits::MatrixOperations;
