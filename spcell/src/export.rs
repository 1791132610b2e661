//! JSON export of CSR stores for observability tooling
//!
//! An orchestration layer that wants more than the one-line
//! [`summary`](spcell_core::CsrMatrix::summary) string can ship the whole
//! store as JSON. Deserialization re-validates the structural invariants;
//! hand-edited payloads cannot smuggle in a broken store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use spcell_core::{CsrMatrix, MatrixElement};

/// Serialize a store to a JSON string
pub fn to_json<T>(matrix: &CsrMatrix<T>) -> serde_json::Result<String>
where
    T: MatrixElement + Serialize,
{
    serde_json::to_string(matrix)
}

/// Deserialize a store from JSON, re-checking every structural invariant
pub fn from_json<T>(json: &str) -> Result<CsrMatrix<T>, FromJsonError>
where
    T: MatrixElement + DeserializeOwned,
{
    let matrix: CsrMatrix<T> = serde_json::from_str(json)?;
    spcell_core::validation::validate(&matrix)?;
    Ok(matrix)
}

/// Failure to import a store from JSON
#[derive(Debug)]
pub enum FromJsonError {
    /// The payload is not valid JSON for a store
    Json(serde_json::Error),
    /// The payload parsed but violates a structural invariant
    Invalid(spcell_core::CsrError),
}

impl From<serde_json::Error> for FromJsonError {
    fn from(err: serde_json::Error) -> Self {
        FromJsonError::Json(err)
    }
}

impl From<spcell_core::CsrError> for FromJsonError {
    fn from(err: spcell_core::CsrError) -> Self {
        FromJsonError::Invalid(err)
    }
}

impl std::fmt::Display for FromJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FromJsonError::Json(err) => write!(f, "invalid JSON payload: {err}"),
            FromJsonError::Invalid(err) => write!(f, "invalid CSR structure: {err}"),
        }
    }
}

impl std::error::Error for FromJsonError {}
