//! HTTP cache validation module
//!
//! Files change on every rebuild during development, so responses are always
//! revalidated (`no-cache`) and validated through an `ETag` derived from the
//! file's size and modification time. The file itself is never read for it.

use chrono::{DateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// `Cache-Control` value sent with every file response
pub const CACHE_CONTROL: &str = "no-cache";

/// Generate an `ETag` from file length and modification time
///
/// Returns a quoted string, e.g. `"2a-17f3c0d2b4e"`. Without an mtime only
/// the length is used.
pub fn file_etag(len: u64, modified: Option<SystemTime>) -> String {
    let nanos = modified
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map_or(0, |d| d.as_nanos());
    format!("\"{len:x}-{nanos:x}\"")
}

/// Whether the client's `If-None-Match` header matches `etag`
///
/// Accepts a comma-separated list, the `*` wildcard, and weak (`W/`) tags.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header.split(',').map(str::trim).any(|candidate| {
            candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
        })
    })
}

/// Format a modification time as an IMF-fixdate for `Last-Modified`
pub fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
