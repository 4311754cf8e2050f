//! HTTP protocol layer module
//!
//! Protocol helpers shared by the request handler: MIME lookup, cache
//! validators, byte ranges, path decoding, bodies and response builders.

pub mod body;
pub mod cache;
pub mod mime;
pub mod path;
pub mod range;
pub mod response;

// Re-export commonly used items
pub use body::ResponseBody;
pub use response::{
    apply_isolation_headers, build_304_response, build_404_response, build_405_response,
    build_416_response, build_html_response, build_options_response, build_redirect_response,
    ISOLATION_HEADERS,
};
