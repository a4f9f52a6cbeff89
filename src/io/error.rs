//! Error types for combination generation, filtering and pipeline navigation

use crate::pipeline::stage::Stage;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and pipeline operations
#[derive(Debug)]
pub enum LottoError {
    /// Caller-supplied argument failed validation
    ///
    /// Covers batch counts outside the accepted bounds, unusable game ranges,
    /// malformed range text and malformed combinations.
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A filter was submitted for a stage other than the current one
    OutOfSequence {
        /// Stage the pipeline cursor is on
        expected: Stage,
        /// Stage the submitted filter belongs to
        found: Stage,
    },

    /// Every filter stage has already been applied or skipped
    PipelineFinished,

    /// General file system or terminal I/O failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LottoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfSequence { expected, found } => {
                write!(
                    f,
                    "Filter for stage '{found}' submitted while pipeline is at stage '{expected}'"
                )
            }
            Self::PipelineFinished => {
                write!(f, "All filter stages have already been applied")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LottoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, LottoError>;

impl From<std::io::Error> for LottoError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<terminal>"),
            operation: "terminal io",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LottoError {
    LottoError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a concrete path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> LottoError {
    LottoError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
