//! Error types for folio-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the Folio crates.
///
/// Scanning frontmatter never fails; these cover the surrounding fetch,
/// rewrite, and configuration steps.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without a known path
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport failure while fetching a document
    #[error("HTTP error: {message}")]
    Http {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The HTML rewriter rejected the page or a binding
    #[error("HTML rewrite error: {0}")]
    Rewrite(String),

    /// Configuration could not be resolved, read, or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Creates an I/O error annotated with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an HTTP error with a message.
    pub fn http<S: Into<String>>(message: S) -> Self {
        Error::Http {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an HTTP error with a message and source error.
    pub fn http_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Http {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a rewrite error.
    pub fn rewrite<S: Into<String>>(message: S) -> Self {
        Error::Rewrite(message.into())
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Creates a serialization error.
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Error::Serialization(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
