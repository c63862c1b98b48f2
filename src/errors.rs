/*!
 * Error types for the xamlcopy application.
 *
 * Every I/O failure carries the path it happened on, so the diagnostic
 * printed on abort names the file that stopped the run.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The user's home directory could not be determined
    #[error("Unable to determine the home directory of the current user")]
    HomeDirUnavailable,

    /// The invocation directory could not be resolved or listed
    #[error("Failed to list directory {path:?}")]
    ListDirectory {
        /// Directory being listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A matched source file could not be read
    #[error("Failed to read source file {path:?}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The intermediate text file could not be written
    #[error("Failed to write output file {path:?}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text file could not be moved to the destination
    #[error("Failed to move {from:?} to {to:?}")]
    MoveOutput {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration values that cannot produce a sensible run
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Path the failure is attached to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ListDirectory { path, .. }
            | Self::ReadSource { path, .. }
            | Self::WriteOutput { path, .. } => Some(path),
            Self::MoveOutput { from, .. } => Some(from),
            Self::HomeDirUnavailable | Self::InvalidConfig(_) => None,
        }
    }
}
