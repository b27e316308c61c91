//! Error types for the harvester.
//!
//! Uses thiserror for derive macros. The display text of each variant is the
//! diagnostic line printed before the process exits.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for harvester operations.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// A required option was absent or had an empty value.
    #[error("[{flag}] - attribute not specified")]
    MissingOption { flag: &'static str },

    /// An option value could not be parsed as a four-part version.
    #[error("[{flag}] - {value} is not a valid version number")]
    InvalidVersion { flag: &'static str, value: String },

    /// A file name pattern could not be compiled into a glob.
    #[error("[/f] - '{pattern}' is not a valid file pattern: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The directory to harvest from does not exist.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Reading, writing or listing a path failed.
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarvestError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        HarvestError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HarvestError::MissingOption { .. }
            | HarvestError::InvalidVersion { .. }
            | HarvestError::InvalidPattern { .. } => exit_codes::USER_ERROR,
            HarvestError::DirectoryNotFound(_) | HarvestError::Io { .. } => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
