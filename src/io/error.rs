//! Error types for console input and report output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid evaluation operations
#[derive(Debug)]
pub enum ChargeGridError {
    /// A scalar read from the console or the command line failed to parse
    InvalidInput {
        /// Prompt or flag the value was entered for
        prompt: &'static str,
        /// Raw text that failed to parse
        value: String,
        /// Explanation of why the value was rejected
        reason: String,
    },

    /// File system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading from or writing to the terminal failed
    Console {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ChargeGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                prompt,
                value,
                reason,
            } => {
                write!(f, "Invalid input for '{prompt}' = '{value}': {reason}")
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
            Self::Console { operation, source } => {
                write!(f, "Console error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for ChargeGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Console { source, .. } => Some(source),
            Self::InvalidInput { .. } => None,
        }
    }
}

impl From<std::io::Error> for ChargeGridError {
    fn from(err: std::io::Error) -> Self {
        Self::Console {
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for grid evaluation results
pub type Result<T> = std::result::Result<T, ChargeGridError>;

/// Create an invalid input error
pub fn invalid_input(
    prompt: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ChargeGridError {
    ChargeGridError::InvalidInput {
        prompt,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> ChargeGridError {
    ChargeGridError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

/// Create a console error
pub const fn console_error(operation: &'static str, source: std::io::Error) -> ChargeGridError {
    ChargeGridError::Console { operation, source }
}
