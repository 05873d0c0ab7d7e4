use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure of an external collaborator.
///
/// Cloneable so that test doubles can replay the same failure on every call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExternalError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("response body too large: limit {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("failed to read '{}': {message}", path.display())]
    Io {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A test double was called without a configured outcome.
    #[error("no outcome configured for {0}")]
    NotConfigured(String),
}

impl ExternalError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::Io {
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
