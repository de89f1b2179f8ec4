//! Domain-level errors

use thiserror::Error;

/// Domain errors represent reporting-structure violations.
/// Dangling manager references are not among them: those are warnings.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unknown person: {0}")]
    UnknownPerson(String),

    #[error("cannot write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type for hierarchy operations.
pub type DomainResult<T> = Result<T, DomainError>;
