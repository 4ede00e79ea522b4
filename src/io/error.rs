//! Error types for inspection, style derivation and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for every pipeline stage
#[derive(Debug)]
pub enum StyleError {
    /// The inspection utility could not be started
    ProcessSpawn {
        /// Program that was launched
        program: String,
        /// Underlying launch error
        source: std::io::Error,
    },

    /// The inspection utility exited unsuccessfully
    ///
    /// `code` is `None` when the process was terminated by a signal.
    ProcessStatus {
        /// Program that was launched
        program: String,
        /// Exit code reported by the operating system
        code: Option<i32>,
    },

    /// The inspection utility wrote to standard error
    ///
    /// Any diagnostic output is treated as a failure, even on a zero exit.
    ProcessStderr {
        /// Program that was launched
        program: String,
        /// Captured standard error text
        stderr: String,
    },

    /// Report text does not look like a JSON object or array
    Format {
        /// Description of what's wrong with the report
        reason: String,
    },

    /// Report text looked structured but failed to decode
    Parse {
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// The report parser returned an error marker instead of a result
    Inspection {
        /// Message carried by the error marker
        message: String,
    },

    /// Style output could not be encoded
    Serialize {
        /// Underlying encode error
        source: serde_json::Error,
    },

    /// Style output could not be written
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProcessSpawn { program, source } => {
                write!(f, "Failed to run '{program}': {source}")
            }
            Self::ProcessStatus { program, code } => match code {
                Some(code) => write!(f, "'{program}' exited with status {code}"),
                None => write!(f, "'{program}' was terminated by a signal"),
            },
            Self::ProcessStderr { program, stderr } => {
                write!(f, "'{program}' reported an error: {}", stderr.trim_end())
            }
            Self::Format { reason } => {
                write!(f, "Invalid report format: {reason}")
            }
            Self::Parse { source } => {
                write!(f, "Failed to decode report: {source}")
            }
            Self::Inspection { message } => {
                write!(f, "Inspection failed: {message}")
            }
            Self::Serialize { source } => {
                write!(f, "Failed to encode style layers: {source}")
            }
            Self::Write { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProcessSpawn { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Parse { source } | Self::Serialize { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, StyleError>;

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse { source: err }
    }
}

/// Create a report format error
pub fn format_error(reason: &impl ToString) -> StyleError {
    StyleError::Format {
        reason: reason.to_string(),
    }
}

/// Create an output write error for `path`
pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> StyleError {
    StyleError::Write {
        path: path.into(),
        source,
    }
}
