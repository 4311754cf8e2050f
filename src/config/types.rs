// Configuration types module
// The server binds a fixed address; these values are not read from files or the environment

use std::path::PathBuf;

/// Host the server binds and the launcher opens
pub const DEFAULT_HOST: &str = "localhost";

/// Port the server binds and the launcher opens
pub const DEFAULT_PORT: u16 = 8888;

/// Index files tried, in order, when a directory is requested
pub const DEFAULT_INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Server configuration
///
/// Created once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serving root, the working directory unless a caller says otherwise
    pub root: PathBuf,
    pub index_files: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
            index_files: DEFAULT_INDEX_FILES.iter().map(ToString::to_string).collect(),
        }
    }
}
