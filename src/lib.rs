//! Local development file server for WebAssembly builds.
//!
//! Serves the working directory on `localhost:8888` and attaches the
//! cross-origin isolation headers browsers require before they expose
//! shared-memory WebAssembly to a page.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod launcher;
pub mod logger;
pub mod server;

pub use error::ServeError;
