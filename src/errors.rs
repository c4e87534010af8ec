//! Crate-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Top-level error: tree violations plus settings loading failures.
#[derive(Error, Debug)]
pub enum BloodlineError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for operations that mix settings and tree queries.
pub type BloodlineResult<T> = Result<T, BloodlineError>;
