// Application state module
// Everything a connection task needs, shared behind an Arc and never written after startup

use super::types::ServerConfig;
use crate::http::mime::MimeTable;

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub mime: MimeTable,
    pub access_log: bool,
}

impl AppState {
    /// Build state with the standard MIME table (platform defaults plus the wasm override)
    pub fn new(config: ServerConfig) -> Self {
        Self::with_mime(config, MimeTable::standard())
    }

    pub const fn with_mime(config: ServerConfig, mime: MimeTable) -> Self {
        Self {
            config,
            mime,
            access_log: true,
        }
    }

    /// Disable per-request access log lines (used by tests)
    #[must_use]
    pub const fn without_access_log(mut self) -> Self {
        self.access_log = false;
        self
    }
}
