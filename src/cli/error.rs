//! CLI-level errors (wraps source, domain, and settings errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::DomainError;
use crate::source::SourceError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Settings(#[from] SettingsError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Source(e) => match e {
                SourceError::NotFound(_) => crate::exitcode::NOINPUT,
                SourceError::Read { .. } => crate::exitcode::IOERR,
                SourceError::TooLarge { .. }
                | SourceError::Decode { .. }
                | SourceError::Invalid { .. } => crate::exitcode::DATAERR,
            },
            CliError::Domain(e) => match e {
                DomainError::UnknownPerson(_) => crate::exitcode::DATAERR,
                DomainError::Write(_) => crate::exitcode::IOERR,
            },
            CliError::Settings(_) => crate::exitcode::CONFIG,
        }
    }
}
