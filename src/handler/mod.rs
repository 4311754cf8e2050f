//! Request handler module
//!
//! Method dispatch and the static file responder.

pub mod listing;
pub mod router;
pub mod static_files;

// Re-export main entry points
pub use router::{handle_request, respond, RequestContext};
