//! Error types for the Soul runtime.

use std::path::PathBuf;

use soul_foundation::SoulError;
use thiserror::Error;

/// Result alias for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors raised by the REPL, the CLI and extension persistence.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Reading or writing a file failed.
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        /// What was being attempted ("open", "write", ...).
        action: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Extension data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The line editor failed.
    #[error("editor error: {0}")]
    Editor(String),

    /// The emote or a registry change was rejected.
    #[error(transparent)]
    Soul(#[from] SoulError),

    /// A REPL command was used incorrectly.
    #[error("usage: {0}")]
    Usage(String),
}

impl RuntimeError {
    /// Wraps an I/O failure on `path`.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// The parser error, if this is one.
    #[must_use]
    pub fn soul(&self) -> Option<&SoulError> {
        match self {
            Self::Soul(e) => Some(e),
            _ => None,
        }
    }
}
