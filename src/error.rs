//! Unified error types for the sidecar.

use std::net::SocketAddr;

use thiserror::Error;

/// Unified error type for the sidecar.
#[derive(Error, Debug)]
pub enum SidecarError {
    /// Configuration loading error.
    #[error("configuration error")]
    Config(#[from] envy::Error),

    /// Configuration loaded but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The serve loop stopped with an error.
    #[error("server error")]
    Serve(#[source] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, SidecarError>;
