//! Logger module
//!
//! Console logging for the dev server:
//! - Startup banner
//! - One access log line per request (Common Log Format)
//! - Warnings and errors on stderr

mod format;

pub use format::AccessLogEntry;

use crate::config::ServerConfig;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &ServerConfig) {
    println!("======================================");
    println!("Serving {} at {}", config.root.display(), config.base_url());
    println!("Bound to: {addr}");
    println!("Cross-origin isolation headers enabled (COEP require-corp, COOP same-origin)");
    println!("Press Ctrl+C to stop");
    println!("======================================");
}

pub fn log_browser_opened(url: &str) {
    println!("[INFO] Opening {url} in the default browser");
}

pub fn log_browser_failed(url: &str, err: &std::io::Error) {
    log_warning(&format!("Could not open browser for {url}: {err}"));
}

pub fn log_access(entry: &AccessLogEntry) {
    eprintln!("{}", entry.format_common());
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    eprintln!("[ERROR] Failed to serve connection: {err}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
