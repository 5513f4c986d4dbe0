//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::errors::GreetingError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Greeting(#[from] GreetingError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Usage errors never reach here: clap reports them itself and exits 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Greeting(_) => crate::exitcode::DATAERR,
        }
    }
}
