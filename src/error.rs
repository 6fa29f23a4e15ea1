//! Unified error types for airaug
//!
//! Error strategy:
//! - Per-recording errors (format, metadata, naming): Recoverable, skip
//!   the recording and continue the batch
//! - System errors (output directory, configuration): Fatal, abort batch
//!
//! All errors include actionable suggestions where possible.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for airaug operations
#[derive(Debug, Error)]
pub enum AiraugError {
    // =========================================================================
    // Recoverable errors - skip recording, continue batch
    // =========================================================================
    #[error("Malformed recording '{path}': {reason}\n  Tip: Expected a free-text header followed by ';'-separated rows of label;ax;ay;az;gx;gy;gz")]
    Format { path: PathBuf, reason: String },

    #[error("No augmentation-status line in '{path}'\n  Tip: The header must contain a line starting with 'Augmentation:'")]
    MissingField { path: PathBuf },

    #[error("Filename '{filename}' does not contain the 'a0' token\n  Tip: Augmented filenames are derived by replacing 'a0'; files outside the naming grammar cannot be augmented")]
    Naming { filename: String },

    #[error("File not found: '{0}'\n  Tip: Check the path exists and is accessible")]
    FileNotFound(PathBuf),

    // =========================================================================
    // Fatal errors - abort entire batch
    // =========================================================================
    #[error("Invalid rotation axis '{0}': use 'x', 'y', or 'z'")]
    InvalidAxis(String),

    #[error("Cannot write output to '{path}': {reason}\n  Tip: Check write permissions for the output directory")]
    Output { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for airaug operations
pub type Result<T> = std::result::Result<T, AiraugError>;

impl AiraugError {
    /// Returns true if this error is recoverable (skip the recording, continue the batch)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AiraugError::Format { .. }
                | AiraugError::MissingField { .. }
                | AiraugError::Naming { .. }
                | AiraugError::FileNotFound(_)
        )
    }

    /// Create a format error with context about the issue
    pub fn format_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AiraugError::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!(
                    "Permission denied. Check that you have write access to {}",
                    path.display()
                )
            }
            std::io::ErrorKind::NotFound => {
                format!(
                    "Directory does not exist: {}",
                    path.parent()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                )
            }
            _ => err.to_string(),
        };
        AiraugError::Output { path, reason }
    }
}
