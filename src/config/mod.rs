// Configuration module entry point
// Holds the fixed server configuration and the shared, read-only application state

mod state;
mod types;

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::ServeError;

// Re-export public types
pub use state::AppState;
pub use types::{ServerConfig, DEFAULT_HOST, DEFAULT_INDEX_FILES, DEFAULT_PORT};

impl ServerConfig {
    /// Resolve the configured host/port into the address the listener binds.
    ///
    /// `localhost` may resolve to several addresses; the first one wins.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServeError> {
        let resolve_err = |source| ServeError::Resolve {
            host: self.host.clone(),
            port: self.port,
            source,
        };

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(resolve_err)?
            .next()
            .ok_or_else(|| {
                resolve_err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no addresses returned",
                ))
            })
    }

    /// Base URL announced in the startup banner and used by the launcher
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
