//! Navigation error types
//!
//! Defines the errors that can occur while injecting the navigation bar
//! into a host document or a static site.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering into a host document
#[derive(Error, Debug)]
pub enum NavError {
    /// The host document has no `<head>` container
    #[error("Document has no head element")]
    MissingHead,

    /// The host document has no `<body>` container
    #[error("Document has no body element")]
    MissingBody,

    /// The host environment rejected a DOM operation
    #[error("Host error: {0}")]
    Host(String),

    /// Reading or writing a page failed
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Site traversal failed
    #[error("Walk error: {0}")]
    Walk(String),
}

#[cfg(feature = "site")]
impl From<ignore::Error> for NavError {
    fn from(err: ignore::Error) -> Self {
        NavError::Walk(err.to_string())
    }
}

/// Result type alias for navigation operations
pub type NavResult<T> = Result<T, NavError>;
