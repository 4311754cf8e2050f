//! Startup error types
//!
//! Per-request failures never surface here: they are turned into HTTP status
//! responses by the handler. Only conditions that stop the server from
//! starting are represented.

use std::net::SocketAddr;
use thiserror::Error;

/// Result type for server startup
pub type Result<T> = std::result::Result<T, ServeError>;

/// Fatal startup error
#[derive(Error, Debug)]
pub enum ServeError {
    /// Configured host name could not be resolved
    #[error("Failed to resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Listener could not be bound (port in use, missing permission)
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Tokio runtime could not be created
    #[error("Failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ServeError {
    /// Whether the error is the "address already in use" case
    pub fn is_addr_in_use(&self) -> bool {
        matches!(self, Self::Bind { source, .. } if source.kind() == std::io::ErrorKind::AddrInUse)
    }
}
