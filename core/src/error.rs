//! Error types for the todo service.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from an actual failure. Validation problems
//! carry a field-level message for the client; storage problems wrap the
//! underlying `StoreError` and are never retried.

use thiserror::Error;

/// Errors from the file-backed store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("failed to access backing file: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not contain a valid todo collection.
    #[error("backing file contains malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors surfaced by `TodoService` operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// No todo with the requested id exists.
    #[error("todo not found")]
    NotFound,

    /// The input failed validation; the message names the offending field.
    #[error("{0}")]
    Validation(String),

    /// The store failed underneath the operation.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
