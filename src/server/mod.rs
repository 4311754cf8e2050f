// Server module entry point
// Binding, the accept loop and per-connection serving

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the file is mounted as server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::error::{Result, ServeError};

// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::start_server_loop;

/// A bound file server that has not started accepting yet
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Bind the address from `state.config`.
    ///
    /// Fails fast with [`ServeError::Bind`] when the port is taken; there is
    /// no retry.
    pub fn bind(state: Arc<AppState>) -> Result<Self> {
        let addr = state.config.socket_addr()?;
        let listener = create_listener(addr).map_err(|source| ServeError::Bind { addr, source })?;
        Ok(Self { listener, state })
    }

    /// Address actually bound (differs from the configured one for port 0)
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Serve until the process is terminated. Must run inside a `LocalSet`.
    pub async fn run(self) {
        start_server_loop(self.listener, self.state).await;
    }
}
