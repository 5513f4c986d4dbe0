use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetingError {
    #[error("unsupported placeholder '{{{0}}}' in format string (only {{name}} is recognized)")]
    UnknownPlaceholder(String),

    #[error("unbalanced '{0}' in format string (use '{0}{0}' for a literal brace)")]
    UnbalancedBrace(char),
}

pub type GreetingResult<T> = Result<T, GreetingError>;
