//! Error types for listing and rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a missing required argument.
pub const EXIT_USAGE: i32 = 1;
/// Exit status for I/O failures and invalid argument values.
pub const EXIT_FAILURE: i32 = 2;

/// Everything that can go wrong between parsing arguments and printing output.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot stat '{}': {source}", .path.display())]
    PathUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read link '{}': {source}", .path.display())]
    LinkUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory '{}': {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("{0}")]
    InvalidArgument(String),

    /// Only ever logged; renderers fall back to partial output.
    #[error("cannot serialize tree to {format}: {message}")]
    SerializationFailure {
        format: &'static str,
        message: String,
    },
}

impl ListError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ListError::MissingArgument(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
