//! Library error types

use thiserror::Error;

/// Errors surfaced by form state and service operations
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("a submit is already in progress")]
    SubmitInProgress,

    #[error("no submit endpoint configured")]
    MissingSubmitOptions,

    #[error("no upload endpoint configured")]
    MissingUploadOptions,

    #[error("invalid validation pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
