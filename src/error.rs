//! Server startup and runtime errors.

use std::net::SocketAddr;

/// Errors that stop the host server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The TCP listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The serve loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
