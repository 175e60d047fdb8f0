//! Server error types.

use thiserror::Error;

/// Errors that can stop the health server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be claimed, e.g. the port is already in
    /// use or the process lacks permission to bind it.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed after the listener was bound.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
