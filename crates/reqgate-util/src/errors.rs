use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all reqgate operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ReqgateError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line in the requirements file could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    #[diagnostic(help("Lines must follow `name<comparators>  # license-tag`"))]
    Parse { line: usize, message: String },

    /// The manifest as a whole is unusable (unreadable, wrong path, etc.).
    #[error("Manifest error: {message}")]
    Manifest { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ReqgateResult<T> = miette::Result<T>;
