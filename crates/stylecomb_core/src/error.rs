//! Run error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a document, a root path, or the whole run.
///
/// Handler configuration failures are deliberately absent: they are
/// recovered where they occur (the handler is skipped with a warning) and
/// never propagate. See [`crate::rules::OptionError`].
#[derive(Debug, Error)]
pub enum Error {
    /// A root path given to the session does not exist.
    #[error("Path {} was not found", .0.display())]
    PathNotFound(PathBuf),

    /// The parser rejected a document. Fatal to that document only.
    #[error("Parsing error at {path}: {message}")]
    Parse {
        /// The offending file, or a caller-supplied label.
        path: String,
        /// The underlying parser message.
        message: String,
    },

    /// A read, write, stat, or directory listing failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an I/O error tagged with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
