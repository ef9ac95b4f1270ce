use crate::function::FunctionId;
use thiserror::Error;

/// Errors raised when a draft is validated at submit time.
///
/// A failed validation leaves the draft untouched so the caller can surface
/// the problem and let the user correct it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{field}' is empty")]
    MissingRequiredField { field: &'static str },
}

/// Errors raised by the per-journey function store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No function with id '{id}' exists in this journey")]
    NotFound { id: FunctionId },
}

/// Errors raised when a draft session is submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised while saving or loading a journey archive file.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Could not access archive file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode journey archive: {0}")]
    Encode(String),

    #[error("Failed to decode journey archive: {0}")]
    Decode(String),
}
